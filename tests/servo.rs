mod tests {
    use bitline::ServoMapper;
    use bitline::servo::{DEFAULT_MAX_DUTY, DEFAULT_PERIOD_US};

    #[test]
    fn test_angle_monotonic_and_bounded() {
        let mapper = ServoMapper::default();
        let mut previous = 0;
        for angle in 0..=180 {
            let duty = mapper.angle_to_duty(angle);
            assert!(duty >= previous);
            assert!(duty <= mapper.max_duty());
            previous = duty;
        }
    }

    #[test]
    fn test_angle_endpoints() {
        let mapper = ServoMapper::default();
        assert_eq!(mapper.angle_to_duty(0), 0);
        assert_eq!(mapper.angle_to_duty(90), 511);
        assert_eq!(mapper.angle_to_duty(180), DEFAULT_MAX_DUTY);
    }

    #[test]
    fn test_angle_clamps_out_of_range() {
        let mapper = ServoMapper::default();
        assert_eq!(mapper.angle_to_duty(-10), mapper.angle_to_duty(0));
        assert_eq!(mapper.angle_to_duty(200), mapper.angle_to_duty(180));
    }

    #[test]
    fn test_pulse_scaling_against_period() {
        let mapper = ServoMapper::default();
        assert_eq!(mapper.pulse_us_to_duty(0), 0);
        assert_eq!(mapper.pulse_us_to_duty(10_000), 511);
        assert_eq!(mapper.pulse_us_to_duty(20_000), DEFAULT_MAX_DUTY);
    }

    #[test]
    fn test_pulse_clamped_to_period() {
        let mapper = ServoMapper::default();
        assert_eq!(mapper.pulse_us_to_duty(25_000), DEFAULT_MAX_DUTY);
    }

    #[test]
    fn test_pulse_with_14_bit_resolution() {
        let mapper = ServoMapper::with_period(16_383, 20_000);
        // Standard servo endpoints: 1 ms and 2 ms pulses.
        assert_eq!(mapper.pulse_us_to_duty(1000), 819);
        assert_eq!(mapper.pulse_us_to_duty(2000), 1638);
    }

    #[test]
    fn test_zero_period_falls_back_to_default() {
        let mapper = ServoMapper::with_period(100, 0);
        assert_eq!(mapper.period_us(), DEFAULT_PERIOD_US);
    }

    #[test]
    fn test_default_matches_ten_bit_pwm() {
        let mapper = ServoMapper::default();
        assert_eq!(mapper.max_duty(), DEFAULT_MAX_DUTY);
        assert_eq!(mapper.period_us(), DEFAULT_PERIOD_US);
    }
}
