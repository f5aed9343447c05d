#[cfg(test)]
mod tests {
    use lazy_static::lazy_static;
    use std::sync::Arc;

    use rust_da_bn254_encoder::group::EncoderGroup;
    use rust_da_bn254_encoder::mixed::{MixedDecoderInput, MixedEncoder, MixedEncodingOutput};
    use rust_da_bn254_encoder::rs::{self, EncodingParams};
    use rust_da_bn254_encoder::srs::SRS;
    use rust_da_bn254_primitives::errors::KzgError;

    const GETTYSBURG_ADDRESS: &str = "Fourscore and seven years ago our fathers brought forth, on this continent, a new nation, conceived in liberty, and dedicated to the proposition that all men are created equal. Now we are engaged in a great civil war, testing whether that nation, or any nation so conceived, and so dedicated, can long endure. We are met on a great battle-field of that war. We have come to dedicate a portion of that field, as a final resting-place for those who here gave their lives, that that nation might live. It is altogether fitting and proper that we should do this. But, in a larger sense, we cannot dedicate, we cannot consecrate—we cannot hallow—this ground. The brave men, living and dead, who struggled here, have consecrated it far above our poor power to add or detract. The world will little note, nor long remember what we say here, but it can never forget what they did here. It is for us the living, rather, to be dedicated here to the unfinished work which they who fought here have thus far so nobly advanced. It is rather for us to be here dedicated to the great task remaining before us—that from these honored dead we take increased devotion to that cause for which they here gave the last full measure of devotion—that we here highly resolve that these dead shall not have died in vain—that this nation, under God, shall have a new birth of freedom, and that government of the people, by the people, for the people, shall not perish from the earth.";

    lazy_static! {
        static ref GROUP: Arc<EncoderGroup> =
            Arc::new(EncoderGroup::from_srs(SRS::insecure_setup(2048)));
    }

    fn mixed_params() -> Vec<EncodingParams> {
        vec![
            EncodingParams::new(128, 8).unwrap(),
            EncodingParams::new(32, 64).unwrap(),
            EncodingParams::new(1, 1024).unwrap(),
        ]
    }

    fn decoder_inputs(outputs: &[MixedEncodingOutput]) -> Vec<MixedDecoderInput> {
        outputs
            .iter()
            .map(|output| MixedDecoderInput {
                params: output.params,
                allocation: output.allocation.clone(),
                frames: output
                    .frames
                    .iter()
                    .map(|frame| rs::Frame {
                        coeffs: frame.coeffs.clone(),
                    })
                    .collect(),
                indices: output.indices.clone(),
            })
            .collect()
    }

    #[test]
    fn test_mixed_encoding_round_trip() {
        let blob = GETTYSBURG_ADDRESS.as_bytes();
        let encoder = MixedEncoder::new(GROUP.clone());
        let params = mixed_params();

        let (commitment, _, outputs) = encoder.encode(blob, &params).unwrap();
        assert_eq!(outputs.len(), 3);

        let inputs = decoder_inputs(&outputs);
        let total: usize = inputs.iter().map(|i| i.allocation.num_evaluations).sum();
        let num_evaluations = total.next_power_of_two();
        assert_eq!(num_evaluations, 4096);

        // The middle two configurations alone cover enough of the domain.
        let subset = vec![inputs[1].clone(), inputs[2].clone()];
        let decoded = encoder
            .decode(num_evaluations, blob.len(), &subset)
            .unwrap();
        assert_eq!(decoded, blob);

        // All three configurations tile the domain with no overlap.
        let decoded = encoder
            .decode(num_evaluations, blob.len(), &inputs)
            .unwrap();
        assert_eq!(decoded, blob);

        // Shifted per-configuration commitments are not the global one.
        for output in &outputs {
            assert_ne!(output.shifted_commitment, commitment);
        }
    }

    #[test]
    fn test_mixed_decode_rejects_duplicate_coverage() {
        let blob = GETTYSBURG_ADDRESS.as_bytes();
        let encoder = MixedEncoder::new(GROUP.clone());
        let (_, _, outputs) = encoder.encode(blob, &mixed_params()).unwrap();

        let inputs = decoder_inputs(&outputs);
        let num_evaluations = 4096;
        let doubled = vec![inputs[1].clone(), inputs[1].clone()];
        match encoder.decode(num_evaluations, blob.len(), &doubled) {
            Err(KzgError::DuplicateSample { .. }) => {}
            other => panic!("expected DuplicateSample, got {other:?}"),
        }
    }

    #[test]
    fn test_mixed_decode_rejects_insufficient_coverage() {
        let blob = GETTYSBURG_ADDRESS.as_bytes();
        let encoder = MixedEncoder::new(GROUP.clone());
        let (_, _, outputs) = encoder.encode(blob, &mixed_params()).unwrap();

        let inputs = decoder_inputs(&outputs);
        // Keep a single 8-element frame of the (128, 8) configuration: far
        // below the 48 data elements.
        let mut starved = inputs[0].clone();
        starved.frames.truncate(1);
        starved.indices.truncate(1);
        match encoder.decode(4096, blob.len(), &[starved]) {
            Err(KzgError::InsufficientSamples { .. }) => {}
            other => panic!("expected InsufficientSamples, got {other:?}"),
        }
    }

    #[test]
    fn test_mixed_encode_rejects_empty_params() {
        let encoder = MixedEncoder::new(GROUP.clone());
        assert!(encoder.encode(b"payload", &[]).is_err());
    }
}
