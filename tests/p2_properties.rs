use mcorr_pair::alignment::{pair_id, Alignment, Sequence};
use mcorr_pair::codon::{extract_codons, GeneticCode};
use mcorr_pair::corr::{calc_p2_coding, CodonSite, P2Params};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Random blocks share a backbone so most codons stay synonymous, with a few
// point substitutions per genome.
fn random_block(rng: &mut StdRng, genomes: usize, codons: usize) -> Alignment {
    const BASES: &[u8] = b"ACGT";
    let backbone: Vec<u8> = (0..codons * 3)
        .map(|_| BASES[rng.gen_range(0..4)])
        .collect();

    let sequences = (0..genomes)
        .map(|g| {
            let mut seq = backbone.clone();
            for _ in 0..(codons / 4).max(1) {
                let pos = rng.gen_range(0..seq.len());
                seq[pos] = BASES[rng.gen_range(0..4)];
            }
            Sequence::new(format!("gene1 genome_{:02} len={}", g, seq.len()), seq)
        })
        .collect();

    Alignment::from_sequences(sequences).unwrap()
}

fn params(max_lag: usize, synonymous: bool, site: CodonSite) -> P2Params {
    P2Params {
        codon_offset: 0,
        max_lag,
        synonymous,
        site,
    }
}

#[test]
fn one_result_per_unordered_pair_with_every_lag() {
    let mut rng = StdRng::seed_from_u64(11);
    let code = GeneticCode::bacterial();

    for genomes in 2..6 {
        let aln = random_block(&mut rng, genomes, 40);
        let res = calc_p2_coding(&aln, &params(12, true, CodonSite::Single(2)), &code, None);

        assert_eq!(res.len(), genomes * (genomes - 1) / 2);
        for corr in &res {
            assert_eq!(corr.results.len(), 12);
            for (i, record) in corr.results.iter().enumerate() {
                assert_eq!(record.lag, i * 3);
                if record.n > 0 {
                    assert!(record.mean >= 0.0 && record.mean <= 1.0);
                } else {
                    assert!(record.mean.is_nan());
                }
            }
        }
    }
}

#[test]
fn pair_ids_do_not_depend_on_input_order() {
    let mut rng = StdRng::seed_from_u64(3);
    let code = GeneticCode::bacterial();
    let aln = random_block(&mut rng, 4, 30);

    let mut reversed = aln.clone();
    reversed.sequences.reverse();

    let p = params(5, false, CodonSite::All);
    let mut forward: Vec<String> = calc_p2_coding(&aln, &p, &code, None)
        .into_iter()
        .map(|r| r.pair_id)
        .collect();
    let mut backward: Vec<String> = calc_p2_coding(&reversed, &p, &code, None)
        .into_iter()
        .map(|r| r.pair_id)
        .collect();
    forward.sort();
    backward.sort();
    assert_eq!(forward, backward);

    let (a, b) = (&aln.sequences[0], &aln.sequences[1]);
    assert_eq!(pair_id(a, b), pair_id(b, a));
}

#[test]
fn swapping_a_pair_keeps_the_statistic() {
    let mut rng = StdRng::seed_from_u64(5);
    let code = GeneticCode::bacterial();
    let aln = random_block(&mut rng, 2, 50);
    let mut swapped = aln.clone();
    swapped.sequences.swap(0, 1);

    let p = params(10, false, CodonSite::All);
    let a = calc_p2_coding(&aln, &p, &code, None);
    let b = calc_p2_coding(&swapped, &p, &code, None);
    assert_eq!(a[0].pair_id, b[0].pair_id);
    for (x, y) in a[0].results.iter().zip(&b[0].results) {
        assert_eq!(x.n, y.n);
        assert_eq!(x.mean.to_bits(), y.mean.to_bits());
    }
}

#[test]
fn mate_mode_compares_mate_against_each_sequence() {
    let mut rng = StdRng::seed_from_u64(9);
    let code = GeneticCode::bacterial();
    let aln = random_block(&mut rng, 5, 20);
    let mate = Sequence::new("gene1 reference", aln.sequences[0].seq.clone());

    let res = calc_p2_coding(&aln, &params(4, true, CodonSite::Single(2)), &code, Some(&mate));
    assert_eq!(res.len(), aln.len());
    for corr in &res {
        assert!(corr.pair_id.contains("reference"));
        assert_eq!(corr.results.len(), 4);
    }
}

#[test]
fn identical_sequences_never_differ() {
    let seq = b"ATGCTTGGAAAACCCTTTGGG".to_vec();
    let aln = Alignment::from_sequences(vec![
        Sequence::new("g a", seq.clone()),
        Sequence::new("g b", seq),
    ])
    .unwrap();
    let code = GeneticCode::bacterial();
    let res = calc_p2_coding(&aln, &params(7, false, CodonSite::All), &code, None);

    for (l, record) in res[0].results.iter().enumerate() {
        assert_eq!(record.n, (7 - l) * 3);
        assert_eq!(record.mean, 0.0);
    }
}

#[test]
fn frame_offset_shifts_codons() {
    let code = GeneticCode::bacterial();
    // Offset 1 reads CTT / CTG, a synonymous third-position change.
    let aln = Alignment::from_sequences(vec![
        Sequence::new("g a", b"ACTTAA".to_vec()),
        Sequence::new("g b", b"ACTGAA".to_vec()),
    ])
    .unwrap();
    assert_eq!(extract_codons(&aln.sequences[0].seq, 1).len(), 1);

    let p = P2Params {
        codon_offset: 1,
        max_lag: 1,
        synonymous: true,
        site: CodonSite::Single(2),
    };
    let res = calc_p2_coding(&aln, &p, &code, None);
    assert_eq!(res[0].results[0].n, 1);
    assert_eq!(res[0].results[0].mean, 1.0);
}
