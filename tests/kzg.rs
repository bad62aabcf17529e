use kzg_bn254::{
    commit, commit_g1, commit_g2, g1_xy_be_bytes, gen_coefficients, pairing_check, prove,
    prove_multi, verify, verify_eip197, verify_eip197_checked, verify_multi, FieldElement,
    G1Point, G2Point, Polynomial, Srs, VerifyError,
};
use rand_core::SeedableRng;

fn fe(v: i64) -> FieldElement {
    if v >= 0 {
        FieldElement::from_integer(v as u64)
    } else {
        FieldElement::from_integer((-v) as u64).neg()
    }
}

fn rng() -> rand_chacha::ChaChaRng {
    rand_chacha::ChaChaRng::seed_from_u64(7)
}

#[test]
fn bn254_known_answer_round_trip() {
    let mut r = rng();
    let srs = Srs::setup_insecure(8, &mut r);
    // p(x) = 5 + 2x^2 + x^3
    let p = Polynomial::new(vec![fe(5), fe(0), fe(2), fe(1)]);
    let z = fe(6);
    let y = p.eval(z);
    assert_eq!(y, fe(293));

    let numerator = p.sub(&Polynomial::new(vec![y]));
    let divisor = Polynomial::new(vec![fe(-6), fe(1)]);
    let q = numerator.div(&divisor).unwrap();
    assert_eq!(q, Polynomial::new(vec![fe(48), fe(8), fe(1)]));

    let c = commit(&srs, &p);
    let proof = prove(&srs, &p, z);
    assert!(verify(&srs, &c, &proof, z, y));
}

#[test]
fn tamper_detection_scenarios() {
    let mut r = rng();
    let srs = Srs::setup_insecure(8, &mut r);
    let p = Polynomial::new(vec![fe(5), fe(0), fe(2), fe(1)]);
    let z = fe(6);
    let y = p.eval(z);
    let c = commit(&srs, &p);
    let proof = prove(&srs, &p, z);

    assert!(!verify(&srs, &c, &proof, z, fe(294)));
    assert!(!verify(&srs, &c, &proof, fe(7), y));

    let tampered = kzg_bn254::Proof(proof.0.add(&G1Point::generator()));
    assert!(!verify(&srs, &c, &tampered, z, y));
}

#[test]
fn pairing_sanity_bilinearity() {
    let mut r = rng();
    let p = G1Point::generator();
    let q = G2Point::generator().scalar_mul(FieldElement::random(&mut r));
    let r_point = G2Point::generator().scalar_mul(FieldElement::random(&mut r));

    // e(P, Q) * e(-P, Q) = 1
    assert!(pairing_check(&[(p, q), (p.neg(), q)]).unwrap());

    // e(P, Q+R) = e(P, Q) * e(P, R), checked via the single batched product:
    // e(P, Q+R) * e(-P, Q) * e(-P, R) = 1
    assert!(pairing_check(&[(p, q.add(&r_point)), (p.neg(), q), (p.neg(), r_point)]).unwrap());
}

#[test]
fn multi_proof_degree_ten_over_nine_points() {
    let mut r = rng();
    let srs = Srs::setup_insecure(16, &mut r);
    let coeffs: Vec<FieldElement> = (0..11).map(|_| FieldElement::random(&mut r)).collect();
    let p = Polynomial::new(coeffs);
    let indices: Vec<FieldElement> = (0..9).map(fe).collect();
    let values: Vec<FieldElement> = indices.iter().map(|z| p.eval(*z)).collect();

    let c = commit(&srs, &p);
    let proof = prove_multi(&srs, &p, &indices).unwrap();
    assert!(verify_multi(&srs, &c, &proof, &indices, &values));

    let swapped = kzg_bn254::MultiProof(G2Point::from_xy(proof.0.y(), proof.0.x()));
    assert!(!verify_multi(&srs, &c, &swapped, &indices, &values));
}

#[test]
fn commitment_homomorphism_holds() {
    let mut r = rng();
    let srs = Srs::setup_insecure(8, &mut r);
    let a = Polynomial::new(vec![fe(1), fe(2), fe(3)]);
    let b = Polynomial::new(vec![fe(4), fe(5)]);
    assert_eq!(commit_g1(&srs, &a.add(&b)), commit_g1(&srs, &a).add(&commit_g1(&srs, &b)));

    let alpha = FieldElement::from_integer(9);
    assert_eq!(commit_g1(&srs, &a.scale(alpha)), commit_g1(&srs, &a).scalar_mul(alpha));
    let _ = commit_g2(&srs, &a);
}

#[test]
fn interpolation_matches_value_vector() {
    let values: Vec<FieldElement> = vec![fe(5), fe(25), fe(125), fe(625)];
    let p = gen_coefficients(&values);
    for (i, v) in values.iter().enumerate() {
        assert_eq!(p.eval(fe(i as i64)), *v);
    }
}

#[test]
fn range_rejection_on_modulus_boundary() {
    let mut r = rng();
    let srs = Srs::setup_insecure(8, &mut r);
    let p = Polynomial::new(vec![fe(5), fe(0), fe(2), fe(1)]);
    let z = fe(6);
    let y = p.eval(z);
    let c = commit(&srs, &p);
    let proof = prove(&srs, &p, z);

    const R_BE: [u8; 32] = [
        0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58,
        0x5d, 0x28, 0x33, 0xe8, 0x48, 0x79, 0xb9, 0x70, 0x91, 0x43, 0xe1, 0xf5, 0x93, 0xf0, 0x00,
        0x00, 0x01,
    ];
    let (c_x, c_y) = g1_xy_be_bytes(&c.0);
    let (pi_x, pi_y) = g1_xy_be_bytes(&proof.0);
    let claim = kzg_bn254::SinglePointClaimBytes {
        c_x,
        c_y,
        pi_x,
        pi_y,
        z: R_BE,
        y: y.to_be_bytes(),
    };
    assert!(!verify_eip197(&srs, &claim));
    assert_eq!(verify_eip197_checked(&srs, &claim), Err(VerifyError::OutOfRange("z")));
}
