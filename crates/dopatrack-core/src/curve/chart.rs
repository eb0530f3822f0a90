//! ASCII rendering of a dopamine curve.

use chrono::{Duration, NaiveTime};

use super::generator::Sample;

/// Bar columns at level 100.
const BAR_WIDTH: usize = 40;
const RULE_WIDTH: usize = 56;

/// Render a sample sequence as an ASCII chart, one row per sample, with
/// time labels in minutes.
pub fn render_ascii_chart(samples: &[Sample]) -> String {
    render(samples, None)
}

/// Render with clock-of-day labels, mapping minute offsets onto a start
/// time (wrapping past midnight).
pub fn render_ascii_chart_with_start(samples: &[Sample], start: NaiveTime) -> String {
    render(samples, Some(start))
}

fn render(samples: &[Sample], start: Option<NaiveTime>) -> String {
    let mut output = String::from("\nDopamine curve:\n");
    output.push_str(&"─".repeat(RULE_WIDTH));
    output.push('\n');

    for sample in samples {
        let clamped = sample.level.clamp(0.0, 100.0);
        let bar_length = (clamped / 100.0 * BAR_WIDTH as f64).round() as usize;
        let bar = "█".repeat(bar_length);
        let empty = " ".repeat(BAR_WIDTH - bar_length);

        let label = match start {
            Some(t) => (t + Duration::minutes(sample.time.round() as i64))
                .format("%H:%M")
                .to_string(),
            None => format!("{:>4.0}m", sample.time),
        };

        output.push_str(&format!("{label} {bar}{empty} {:5.1}\n", sample.level));
    }

    output.push_str(&"─".repeat(RULE_WIDTH));
    output.push_str("\nlevel 0-100, baseline 50\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<Sample> {
        vec![
            Sample {
                time: 0.0,
                level: 50.0,
            },
            Sample {
                time: 18.0,
                level: 77.0,
            },
            Sample {
                time: 90.0,
                level: 55.4,
            },
        ]
    }

    #[test]
    fn test_chart_rows_and_values() {
        let chart = render_ascii_chart(&samples());
        assert!(chart.contains("Dopamine curve:"));
        assert!(chart.contains("   0m"));
        assert!(chart.contains("  18m"));
        assert!(chart.contains("  90m"));
        assert!(chart.contains("█"));
        assert!(chart.contains("77.0"));
        assert!(chart.contains("55.4"));
        assert!(chart.contains("baseline 50"));
    }

    #[test]
    fn test_chart_clock_labels() {
        let start = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        let chart = render_ascii_chart_with_start(&samples(), start);
        assert!(chart.contains("08:00"));
        assert!(chart.contains("08:18"));
        assert!(chart.contains("09:30"));
    }

    #[test]
    fn test_out_of_band_levels_do_not_break_bars() {
        let extreme = vec![
            Sample {
                time: 0.0,
                level: -5.0,
            },
            Sample {
                time: 1.0,
                level: 140.0,
            },
        ];
        let chart = render_ascii_chart(&extreme);
        // Bars are clamped; the printed values are not.
        assert!(chart.contains("-5.0"));
        assert!(chart.contains("140.0"));
    }
}
