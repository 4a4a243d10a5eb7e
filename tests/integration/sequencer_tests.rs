//! Integration tests for the setup → loop pipeline.

use crate::mock_hw::{Call, MockBoard, RecordingSink};

use hellofw::app::events::SequencerEvent;
use hellofw::app::ports::{Level, PinMode};
use hellofw::app::sequencer::{BANNER, ECHO_LINE, Phase, Sequencer};
use hellofw::config::SequencerConfig;
use hellofw::pins;

fn booted() -> (Sequencer, MockBoard, RecordingSink) {
    let mut seq = Sequencer::new(SequencerConfig::default());
    let mut hw = MockBoard::new();
    let mut sink = RecordingSink::default();
    seq.setup(&mut hw, &mut sink).unwrap();
    (seq, hw, sink)
}

#[test]
fn setup_configures_indicator_then_opens_serial() {
    let (seq, hw, _) = booted();

    assert_eq!(
        hw.calls[0],
        Call::ConfigurePin {
            pin: pins::LED_BUILTIN_GPIO,
            mode: PinMode::Output,
        }
    );
    assert_eq!(hw.calls[1], Call::OpenSerial { baud: 9600 });
    assert!(seq.is_serial_open());
    assert_eq!(seq.phase(), Phase::Running);
}

#[test]
fn banner_is_followed_immediately_by_first_echo() {
    let (mut seq, mut hw, mut sink) = booted();
    seq.loop_once(&mut hw, &mut sink);

    let lines = hw.lines();
    assert_eq!(lines[..5], BANNER);
    assert_eq!(lines[5], ECHO_LINE);
    assert_eq!(
        lines.iter().filter(|l| **l == "Hello from Arduino Firmware!").count(),
        1,
        "banner must appear exactly once"
    );
}

#[test]
fn each_iteration_emits_two_echoes_around_the_pin_edges() {
    let (mut seq, mut hw, mut sink) = booted();
    hw.calls.clear();

    seq.loop_once(&mut hw, &mut sink);

    assert_eq!(
        hw.calls,
        vec![
            Call::Line(ECHO_LINE.into()),
            Call::WritePin {
                level: Level::High,
                at_ms: 0,
            },
            Call::Sleep(1000),
            Call::Line(ECHO_LINE.into()),
            Call::WritePin {
                level: Level::Low,
                at_ms: 1000,
            },
            Call::Sleep(1000),
        ]
    );
}

#[test]
fn ten_seconds_of_running_is_five_full_cycles() {
    let (mut seq, mut hw, mut sink) = booted();
    let start = hw.now_ms;

    while hw.now_ms - start < 10_000 {
        seq.loop_once(&mut hw, &mut sink);
    }

    assert_eq!(seq.cycle_count(), 5);
    let echoes = hw.lines().iter().filter(|l| **l == ECHO_LINE).count();
    assert_eq!(echoes, 10);

    let writes = hw.pin_writes();
    assert_eq!(writes.len(), 10);
    for (i, pair) in writes.windows(2).enumerate() {
        assert_eq!(pair[1].0 - pair[0].0, 1000, "edge {i} not 1000 ms after previous");
        assert_eq!(pair[1].1, pair[0].1.toggled(), "edge {i} skipped a transition");
    }
    assert_eq!(writes[0].1, Level::High);
}

#[test]
fn indicator_is_low_at_every_iteration_boundary() {
    let (mut seq, mut hw, mut sink) = booted();
    for _ in 0..4 {
        seq.loop_once(&mut hw, &mut sink);
        assert_eq!(seq.pin_level(), Level::Low);
        assert_eq!(hw.pin_writes().last().map(|w| w.1), Some(Level::Low));
    }
}

#[test]
fn events_trace_the_lifecycle() {
    let (mut seq, mut hw, mut sink) = booted();
    seq.loop_once(&mut hw, &mut sink);
    seq.loop_once(&mut hw, &mut sink);

    assert_eq!(
        sink.events,
        vec![
            SequencerEvent::SerialOpened { baud: 9600 },
            SequencerEvent::SerialReady { waited_ms: 0 },
            SequencerEvent::BannerSent { lines: 5 },
            SequencerEvent::CycleCompleted { cycle: 1 },
            SequencerEvent::CycleCompleted { cycle: 2 },
        ]
    );
}

#[test]
fn custom_half_period_is_honoured() {
    let config = SequencerConfig {
        half_period_ms: 250,
        ..SequencerConfig::default()
    };
    let mut seq = Sequencer::with_pin(config, 13);
    let mut hw = MockBoard::new();
    let mut sink = RecordingSink::default();
    seq.setup(&mut hw, &mut sink).unwrap();
    seq.loop_once(&mut hw, &mut sink);

    assert_eq!(seq.pin(), 13);
    assert_eq!(hw.now_ms, 500);
}
