//! Tests for animations and the animation driver lifecycle

#[cfg(test)]
mod tests {
    use funcimage::io::display::DisplaySink;
    use funcimage::render::{CancelToken, DriverState, RasterMode};
    use funcimage::spatial::translate;
    use funcimage::{AlgebraError, Animation, AnimationDriver, Color, Coord, Image, PixelBuffer};

    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<PixelBuffer>,
    }

    impl DisplaySink for RecordingSink {
        fn present(&mut self, buffer: &PixelBuffer) -> funcimage::Result<()> {
            self.frames.push(buffer.clone());
            Ok(())
        }
    }

    struct FailingSink;

    impl DisplaySink for FailingSink {
        fn present(&mut self, _buffer: &PixelBuffer) -> funcimage::Result<()> {
            Err(AlgebraError::EmptySequence { operation: "present" })
        }
    }

    struct CancelAfter {
        token: CancelToken,
        remaining: usize,
    }

    impl DisplaySink for CancelAfter {
        fn present(&mut self, _buffer: &PixelBuffer) -> funcimage::Result<()> {
            self.remaining = self.remaining.saturating_sub(1);
            if self.remaining == 0 {
                self.token.cancel();
            }
            Ok(())
        }
    }

    // Red channel encodes the frame time in hundredths
    fn clock_animation() -> Animation<Color> {
        Animation::new(|time| Image::constant(Color::clamped((time * 100.0).round() as i64, 0, 0)))
    }

    fn driver(time_step: f64) -> AnimationDriver {
        AnimationDriver::new(clock_animation(), 2, 2, time_step).expect("Failed to create driver")
    }

    // Tests a still animation shows the same image at every time
    // Verified by resolving the frame at time zero only
    #[test]
    fn test_animation_still() {
        let animation = Animation::still(Image::constant(7_u8));

        for time in [0.0, 1.5, -3.0] {
            let frame = animation.at(time).expect("Failed to resolve frame");
            assert_eq!(frame.at(1.0, 1.0), 7);
        }
    }

    // Tests a transformed animation re-evaluates the transform per frame
    // Verified by building the transform once at time zero
    #[test]
    fn test_animation_transformed() {
        let animation = Animation::transformed(Image::new(|c: Coord| c.col), |time| {
            Ok(translate::<f64>(time * 10.0, 0.0))
        });

        let frame = animation.at(2.0).expect("Failed to resolve frame");
        assert!((frame.at(20.0, 0.0)).abs() < 1e-12);
    }

    // Tests frame failures surface from at() and map()
    // Verified by substituting a blank image on failure
    #[test]
    fn test_animation_fallible_frames() {
        let animation = Animation::try_new(|time| {
            if time < 1.0 {
                Ok(Image::constant(1.0))
            } else {
                Err(AlgebraError::InvalidScaleFactor { factor: 0.0 })
            }
        });
        let doubled = animation.map(|v: f64| v * 2.0);

        let early = doubled.at(0.5).expect("Failed to resolve frame");
        assert!((early.at(0.0, 0.0) - 2.0).abs() < 1e-12);
        assert!(matches!(
            doubled.at(1.5),
            Err(AlgebraError::InvalidScaleFactor { .. })
        ));
    }

    // Tests the time step must be positive and finite
    // Verified by accepting a zero step
    #[test]
    fn test_driver_rejects_invalid_time_step() {
        for step in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                AnimationDriver::new(clock_animation(), 2, 2, step),
                Err(AlgebraError::InvalidParameter { parameter: "time_step", .. })
            ));
        }
    }

    // Tests the Idle, Running and Stopped transitions
    // Verified by allowing start from Stopped
    #[test]
    fn test_driver_state_transitions() {
        let mut driver = driver(0.1);
        let mut sink = RecordingSink::default();
        assert_eq!(driver.state(), DriverState::Idle);

        assert!(matches!(
            driver.tick(&mut sink),
            Err(AlgebraError::InvalidState { expected: "running", found: "idle" })
        ));

        driver.start().expect("Failed to start driver");
        assert_eq!(driver.state(), DriverState::Running);
        assert!(driver.start().is_err());

        driver.stop();
        assert_eq!(driver.state(), DriverState::Stopped);
        assert!(driver.start().is_err());
        assert!(driver.tick(&mut sink).is_err());
        assert!(sink.frames.is_empty());
        assert_eq!(DriverState::Stopped.to_string(), "stopped");
    }

    // Tests each tick renders the current time and then advances the clock
    // Verified by advancing the clock before rendering
    #[test]
    fn test_driver_tick_advances_clock() {
        let mut driver = driver(0.5);
        let mut sink = RecordingSink::default();
        driver.start().expect("Failed to start driver");

        for _ in 0..3 {
            driver.tick(&mut sink).expect("Failed to tick");
        }

        assert_eq!(driver.frames_rendered(), 3);
        assert!((driver.time() - 1.5).abs() < 1e-12);
        let reds: Vec<u8> = sink
            .frames
            .iter()
            .filter_map(|frame| frame.get(0, 0))
            .map(|color| color.red)
            .collect();
        assert_eq!(reds, vec![0, 50, 100]);
        assert_eq!(driver.buffer().get(1, 1), Some(Color::rgb(100, 0, 0)));
    }

    // Tests the clock can start at an arbitrary time and render in parallel
    // Verified by ignoring the start time
    #[test]
    fn test_driver_start_time_and_mode() {
        let mut driver = driver(0.25)
            .with_start_time(1.0)
            .with_mode(RasterMode::Parallel);
        let mut sink = RecordingSink::default();
        driver.start().expect("Failed to start driver");
        driver.tick(&mut sink).expect("Failed to tick");

        assert_eq!(driver.buffer().get(0, 1), Some(Color::rgb(100, 0, 0)));
        assert!((driver.time() - 1.25).abs() < 1e-12);
    }

    // Tests a failing frame stops the driver without advancing it
    // Verified by continuing after a failed frame
    #[test]
    fn test_driver_stops_on_frame_failure() {
        let animation = Animation::try_new(|time| {
            if time < 0.15 {
                Ok(Image::constant(Color::WHITE))
            } else {
                Err(AlgebraError::InvalidScaleFactor { factor: 0.0 })
            }
        });
        let mut driver =
            AnimationDriver::new(animation, 2, 2, 0.1).expect("Failed to create driver");
        let mut sink = RecordingSink::default();
        driver.start().expect("Failed to start driver");

        assert!(driver.tick(&mut sink).is_ok());
        assert!(driver.tick(&mut sink).is_ok());
        assert!(matches!(
            driver.tick(&mut sink),
            Err(AlgebraError::InvalidScaleFactor { .. })
        ));

        assert_eq!(driver.state(), DriverState::Stopped);
        assert_eq!(driver.frames_rendered(), 2);
        assert_eq!(sink.frames.len(), 2);
    }

    // Tests a failing sink stops the driver
    // Verified by ignoring the sink result
    #[test]
    fn test_driver_stops_on_sink_failure() {
        let mut driver = driver(0.1);
        driver.start().expect("Failed to start driver");

        assert!(driver.tick(&mut FailingSink).is_err());
        assert_eq!(driver.state(), DriverState::Stopped);
        assert_eq!(driver.frames_rendered(), 0);
    }

    // Tests run keeps ticking until the token is cancelled
    // Verified by checking the token only after the loop
    #[test]
    fn test_driver_run_until_cancelled() {
        let token = CancelToken::new();
        let mut sink = CancelAfter {
            token: token.clone(),
            remaining: 4,
        };
        let mut driver = driver(0.1);

        let presented = driver.run(&mut sink, &token).expect("Failed to run driver");

        assert_eq!(presented, 4);
        assert_eq!(driver.frames_rendered(), 4);
        assert_eq!(driver.state(), DriverState::Stopped);
        assert!(token.is_cancelled());
    }

    // Tests an already cancelled token renders nothing
    // Verified by ticking once before checking the token
    #[test]
    fn test_driver_run_pre_cancelled() {
        let token = CancelToken::new();
        token.cancel();
        let mut sink = RecordingSink::default();
        let mut driver = driver(0.1);

        assert_eq!(driver.run(&mut sink, &token).ok(), Some(0));
        assert!(sink.frames.is_empty());
        assert_eq!(driver.state(), DriverState::Stopped);
        assert!(driver.run(&mut sink, &CancelToken::new()).is_err());
    }
}
