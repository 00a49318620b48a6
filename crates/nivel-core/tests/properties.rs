//! Property-based tests for the gain stage.
//!
//! Randomized coverage of the invariants: the effective gain floor, the
//! multiply-only render path, and the state codec.

use nivel_core::{AudioBlock, ChannelPair, GainStage, NoteEvent, decode_state, encode_state};
use proptest::prelude::*;

fn duck(stage: &mut GainStage, velocity: f32) {
    let events = [NoteEvent::On { pitch: 60, channel: 0, velocity }];
    let mut pairs: [ChannelPair<'_>; 0] = [];
    let mut block = AudioBlock::new(&mut pairs, 0).with_events(&events[..]);
    stage.process(&mut block);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// For any gain and note velocity in [0, 1], the effective gain stays
    /// inside [0, gain]: the reduction can only attenuate.
    #[test]
    fn effective_gain_stays_within_bounds(
        gain in 0.0f32..=1.0,
        velocity in 0.0f32..=1.0,
    ) {
        let mut stage = GainStage::new();
        stage.set_gain(gain);
        duck(&mut stage, velocity);

        let effective = stage.effective_gain();
        prop_assert!(effective >= 0.0);
        prop_assert!(effective <= gain);
        prop_assert!((effective - (gain - velocity).max(0.0)).abs() < 1e-6);
    }

    /// Without a side-chain the render path is a uniform scale.
    #[test]
    fn plain_path_is_uniform_scaling(
        gain in 0.0f32..=1.0,
        input in prop::array::uniform32(-1.0f32..=1.0),
    ) {
        let mut stage = GainStage::new();
        stage.set_gain(gain);

        let mut output = [0.0f32; 32];
        let mut pairs = [ChannelPair::Split { input: &input[..], output: &mut output[..] }];
        let mut block = AudioBlock::new(&mut pairs, 32);
        stage.process(&mut block);

        for (out, dry) in output.iter().zip(input.iter()) {
            prop_assert_eq!(*out, dry * gain);
        }
    }

    /// The side-chain path multiplies sample-wise and never produces
    /// non-finite output from finite input.
    #[test]
    fn side_chain_path_is_sample_wise_and_finite(
        gain in 0.0f32..=1.0,
        input in prop::array::uniform32(-1.0f32..=1.0),
        aux in prop::array::uniform32(-4.0f32..=4.0),
    ) {
        let mut stage = GainStage::new();
        stage.set_gain(gain);

        let mut output = [0.0f32; 32];
        let mut pairs = [ChannelPair::Split { input: &input[..], output: &mut output[..] }];
        let mut block = AudioBlock::new(&mut pairs, 32).with_side_chain(&aux[..]);
        stage.process(&mut block);

        for n in 0..32 {
            prop_assert!(output[n].is_finite());
            prop_assert_eq!(output[n], input[n] * aux[n] * gain);
        }
    }

    /// In-place and split rendering agree bit for bit.
    #[test]
    fn in_place_matches_split(
        gain in 0.0f32..=1.0,
        input in prop::array::uniform32(-1.0f32..=1.0),
    ) {
        let mut stage = GainStage::new();
        stage.set_gain(gain);

        let mut split_out = [0.0f32; 32];
        let mut pairs = [ChannelPair::Split { input: &input[..], output: &mut split_out[..] }];
        let mut block = AudioBlock::new(&mut pairs, 32);
        stage.process(&mut block);

        let mut in_place = input;
        let mut pairs = [ChannelPair::InPlace(&mut in_place[..])];
        let mut block = AudioBlock::new(&mut pairs, 32);
        stage.process(&mut block);

        prop_assert_eq!(split_out, in_place);
    }

    /// The state codec round-trips any gain in range bit-exactly.
    #[test]
    fn state_codec_round_trips(gain in 0.0f32..=1.0) {
        prop_assert_eq!(decode_state(&encode_state(gain)), Some(gain));
    }
}
