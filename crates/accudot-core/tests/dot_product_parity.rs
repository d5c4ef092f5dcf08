use accudot_core::{DotError, DotVariant, dot_product, reference_dot_product};

#[test]
fn zero_length_inputs_return_the_additive_identity_for_every_variant() {
    let empty_f32: [f32; 0] = [];
    let empty_f64: [f64; 0] = [];
    for variant in DotVariant::ALL {
        assert_eq!(dot_product(variant, &empty_f32, &empty_f32), Ok(0.0));
        assert_eq!(dot_product(variant, &empty_f64, &empty_f64), Ok(0.0));
    }
    assert_eq!(reference_dot_product(&empty_f32, &empty_f32), Ok(0.0));
    assert_eq!(reference_dot_product(&empty_f64, &empty_f64), Ok(0.0));
}

#[test]
fn single_element_inputs_return_the_correctly_rounded_product() {
    let cases = [
        (3.0f32, 7.0f32),
        (1.0e8, 1.0e-8),
        (-0.1, 0.3),
        (1.0 + f32::EPSILON, 1.0 + f32::EPSILON),
    ];
    for (a, b) in cases {
        for variant in DotVariant::ALL {
            assert_eq!(
                dot_product(variant, &[a], &[b]),
                Ok(a * b),
                "variant {variant} on [{a}] x [{b}]"
            );
        }
    }
}

#[test]
fn catastrophic_cancellation_is_survived_by_kobbelt_and_the_oracle() {
    let v1 = [1.0f32, 1.0e8, -1.0e8];
    let v2 = [1.0f32, 1.0, 1.0];

    // Left-to-right single precision rounds the leading 1 away entirely.
    assert_eq!(dot_product(DotVariant::Naive, &v1, &v2), Ok(0.0));
    assert_eq!(dot_product(DotVariant::Kobbelt, &v1, &v2), Ok(1.0));
    assert_eq!(reference_dot_product(&v1, &v2), Ok(1.0));

    let v1 = [1.0f64, 1.0e16, -1.0e16];
    let v2 = [1.0f64, 1.0, 1.0];
    assert_eq!(dot_product(DotVariant::Naive, &v1, &v2), Ok(0.0));
    assert_eq!(dot_product(DotVariant::Kobbelt, &v1, &v2), Ok(1.0));
    assert_eq!(reference_dot_product(&v1, &v2), Ok(1.0));
}

#[test]
fn all_zero_vectors_return_exactly_zero_everywhere() {
    let zeros_f32 = [0.0f32; 33];
    let zeros_f64 = [0.0f64; 33];
    for variant in DotVariant::ALL {
        assert_eq!(dot_product(variant, &zeros_f32, &zeros_f32), Ok(0.0));
        assert_eq!(dot_product(variant, &zeros_f64, &zeros_f64), Ok(0.0));
    }
    assert_eq!(reference_dot_product(&zeros_f32, &zeros_f32), Ok(0.0));
    assert_eq!(reference_dot_product(&zeros_f64, &zeros_f64), Ok(0.0));
}

#[test]
fn repeated_evaluation_is_bit_identical_for_every_variant() {
    let v1: Vec<f32> = (0..512)
        .map(|index| ((index * 2_654_435_761_u32 as usize % 8_192) as f32 - 4_096.0) * 0.37)
        .collect();
    let v2: Vec<f32> = (0..512)
        .map(|index| ((index * 40_503 % 8_192) as f32 - 4_096.0) * 1.13)
        .collect();

    for variant in DotVariant::ALL {
        let first = dot_product(variant, &v1, &v2).expect("equal lengths");
        let second = dot_product(variant, &v1, &v2).expect("equal lengths");
        assert_eq!(first.to_bits(), second.to_bits(), "variant {variant}");
    }
    let first = reference_dot_product(&v1, &v2).expect("equal lengths");
    let second = reference_dot_product(&v1, &v2).expect("equal lengths");
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn mismatched_lengths_fail_fast_for_every_entry_point() {
    let left = [1.0f64, 2.0, 3.0];
    let right = [1.0f64, 2.0];
    for variant in DotVariant::ALL {
        assert_eq!(
            dot_product(variant, &left, &right),
            Err(DotError::LengthMismatch { left: 3, right: 2 }),
            "variant {variant}"
        );
    }
    assert_eq!(
        reference_dot_product(&left, &right),
        Err(DotError::LengthMismatch { left: 3, right: 2 })
    );
}
