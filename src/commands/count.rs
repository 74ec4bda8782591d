use crate::alignment::count_alignments;
use anyhow::Result;
use std::path::Path;

pub fn run(input: &Path) -> Result<usize> {
    let count = count_alignments(input)?;
    println!("{}", count);
    Ok(count)
}
