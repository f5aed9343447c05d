#[cfg(test)]
mod tests {
    use ark_bn254::{Fq, G1Affine};
    use lazy_static::lazy_static;
    use std::sync::Arc;

    use rust_da_bn254_encoder::group::EncoderGroup;
    use rust_da_bn254_encoder::mixed::MixedEncoder;
    use rust_da_bn254_encoder::rs::EncodingParams;
    use rust_da_bn254_encoder::srs::SRS;
    use rust_da_bn254_primitives::errors::KzgError;
    use rust_da_bn254_verifier::batch::{batch_verify_commit_equivalence, CommitmentPair};
    use rust_da_bn254_verifier::frame::verify_frame;

    const GETTYSBURG_ADDRESS: &str = "Fourscore and seven years ago our fathers brought forth, on this continent, a new nation, conceived in liberty, and dedicated to the proposition that all men are created equal. Now we are engaged in a great civil war, testing whether that nation, or any nation so conceived, and so dedicated, can long endure. We are met on a great battle-field of that war. We have come to dedicate a portion of that field, as a final resting-place for those who here gave their lives, that that nation might live. It is altogether fitting and proper that we should do this. But, in a larger sense, we cannot dedicate, we cannot consecrate—we cannot hallow—this ground. The brave men, living and dead, who struggled here, have consecrated it far above our poor power to add or detract. The world will little note, nor long remember what we say here, but it can never forget what they did here. It is for us the living, rather, to be dedicated here to the unfinished work which they who fought here have thus far so nobly advanced. It is rather for us to be here dedicated to the great task remaining before us—that from these honored dead we take increased devotion to that cause for which they here gave the last full measure of devotion—that we here highly resolve that these dead shall not have died in vain—that this nation, under God, shall have a new birth of freedom, and that government of the people, by the people, for the people, shall not perish from the earth.";

    lazy_static! {
        static ref SRS_INSTANCE: SRS = SRS::insecure_setup(2048);
        static ref GROUP: Arc<EncoderGroup> =
            Arc::new(EncoderGroup::from_srs(SRS_INSTANCE.clone()));
    }

    #[test]
    fn test_every_frame_verifies() {
        let blob = GETTYSBURG_ADDRESS.as_bytes();
        let enc = GROUP.get_or_create(EncodingParams::new(8, 32).unwrap()).unwrap();
        let (commitment, _, frames, indices) = enc.encode_bytes(blob).unwrap();

        for (frame, &j) in frames.iter().zip(&indices) {
            let x = enc.rs().leading_coset_root(j).unwrap();
            assert!(
                verify_frame(frame, &commitment, x, &SRS_INSTANCE).unwrap(),
                "frame with leading index {j} failed verification"
            );
        }
    }

    #[test]
    fn test_tampered_frame_fails_verification() {
        let blob = GETTYSBURG_ADDRESS.as_bytes();
        let enc = GROUP.get_or_create(EncodingParams::new(8, 32).unwrap()).unwrap();
        let (commitment, _, frames, indices) = enc.encode_bytes(blob).unwrap();

        // Proof swapped with a different frame's proof.
        let mut swapped = frames[0].clone();
        swapped.proof = frames[1].proof;
        let x = enc.rs().leading_coset_root(indices[0]).unwrap();
        assert!(!verify_frame(&swapped, &commitment, x, &SRS_INSTANCE).unwrap());

        // Coefficients tampered.
        let mut corrupted = frames[0].clone();
        let delta = corrupted.coeffs[2];
        corrupted.coeffs[3] += delta;
        assert!(!verify_frame(&corrupted, &commitment, x, &SRS_INSTANCE).unwrap());

        // Frame verified against the wrong leading root.
        let wrong_x = enc.rs().leading_coset_root(indices[1]).unwrap();
        assert!(!verify_frame(&frames[0], &commitment, wrong_x, &SRS_INSTANCE).unwrap());
    }

    #[test]
    fn test_mixed_frames_verify_against_shifted_commitment() {
        let blob = GETTYSBURG_ADDRESS.as_bytes();
        let encoder = MixedEncoder::new(GROUP.clone());
        let params = vec![
            EncodingParams::new(8, 8).unwrap(),
            EncodingParams::new(4, 16).unwrap(),
        ];
        let (_, _, outputs) = encoder.encode(blob, &params).unwrap();

        for output in &outputs {
            let enc = GROUP.get_or_create(output.params).unwrap();
            for (frame, &j) in output.frames.iter().zip(&output.indices) {
                let x = enc.rs().leading_coset_root(j).unwrap();
                assert!(
                    verify_frame(frame, &output.shifted_commitment, x, &SRS_INSTANCE).unwrap(),
                    "mixed frame with leading index {j} failed verification"
                );
            }
        }
    }

    #[test]
    fn test_batch_equivalence() {
        let blob = GETTYSBURG_ADDRESS.as_bytes();
        let enc = GROUP.get_or_create(EncodingParams::new(4, 64).unwrap()).unwrap();
        let (commitment, length_commitment, _, _) = enc.encode_bytes(blob).unwrap();

        let pairs = vec![
            CommitmentPair {
                commitment,
                length_commitment,
            };
            5
        ];
        assert_eq!(batch_verify_commit_equivalence(&pairs), Ok(()));

        // Doubling every commitment breaks the pairing for all pairs.
        let doubled: G1Affine = (commitment + commitment).into();
        let all_modified: Vec<CommitmentPair> = pairs
            .iter()
            .map(|pair| CommitmentPair {
                commitment: doubled,
                length_commitment: pair.length_commitment,
            })
            .collect();
        assert_eq!(
            batch_verify_commit_equivalence(&all_modified),
            Err(KzgError::InvalidBatch)
        );

        // A single corrupted pair is caught by the aggregation.
        let mut one_modified = pairs.clone();
        one_modified[2].commitment = doubled;
        assert_eq!(
            batch_verify_commit_equivalence(&one_modified),
            Err(KzgError::InvalidBatch)
        );
    }

    #[test]
    fn test_batch_equivalence_empty_is_ok() {
        assert_eq!(batch_verify_commit_equivalence(&[]), Ok(()));
    }

    #[test]
    fn test_batch_rejects_invalid_points() {
        let blob = GETTYSBURG_ADDRESS.as_bytes();
        let enc = GROUP.get_or_create(EncodingParams::new(4, 64).unwrap()).unwrap();
        let (_, length_commitment, _, _) = enc.encode_bytes(blob).unwrap();

        let off_curve = G1Affine::new_unchecked(Fq::from(1u64), Fq::from(1u64));
        let pairs = [CommitmentPair {
            commitment: off_curve,
            length_commitment,
        }];
        match batch_verify_commit_equivalence(&pairs) {
            Err(KzgError::NotOnCurveError(_)) => {}
            other => panic!("expected NotOnCurveError, got {other:?}"),
        }
    }
}
