use crate::models::{AxisTick, BarStyle, ChartData, ChartPoint, MoodEntry, Tooltip, YAxis};

pub const BAR_WIDTH: u32 = 40;
pub const BAR_RADIUS: u32 = 20;
pub const Y_DOMAIN: [f64; 2] = [0.0, 10.0];

/// Sleep is shown in coarse bands rather than on a continuous scale.
pub const Y_TICKS: [(f64, &str); 5] = [
    (0.0, "0-2h"),
    (3.0, "3-4h"),
    (5.0, "5-6h"),
    (7.0, "7-8h"),
    (9.0, "9+h"),
];

pub fn to_chart_points(entries: &[MoodEntry]) -> Vec<ChartPoint> {
    entries.iter().map(chart_point).collect()
}

fn chart_point(entry: &MoodEntry) -> ChartPoint {
    let profile = entry.mood.profile();
    ChartPoint {
        date: entry.display_date.clone(),
        sleep_hours: entry.sleep_hours,
        mood: entry.mood,
        mood_label: profile.label,
        bar_color: profile.bar_color,
        icon: entry.mood.icon(),
        icon_color: profile.icon_color,
        tooltip: Tooltip {
            date: entry.display_date.clone(),
            mood_label: profile.label,
            sleep_hours: entry.sleep_hours,
        },
    }
}

/// Label for a y-axis tick; ticks outside the band table stay blank.
pub fn y_tick_label(value: f64) -> Option<&'static str> {
    Y_TICKS
        .iter()
        .find(|(tick, _)| *tick == value)
        .map(|(_, label)| *label)
}

pub fn y_axis() -> YAxis {
    YAxis {
        domain: Y_DOMAIN,
        ticks: Y_TICKS
            .iter()
            .map(|(value, label)| AxisTick {
                value: *value,
                label: *label,
            })
            .collect(),
    }
}

pub fn chart_data(entries: &[MoodEntry]) -> ChartData {
    ChartData {
        points: to_chart_points(entries),
        y_axis: y_axis(),
        bar: BarStyle {
            width: BAR_WIDTH,
            radius: [BAR_RADIUS; 4],
        },
    }
}
