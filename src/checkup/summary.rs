//! Who, where and when: the report header. No goals.

use crate::save::SaveDocument;
use crate::shared::*;

const MS_PER_HOUR: u64 = 3_600_000;
const MS_PER_MINUTE: u64 = 60_000;

/// "12 hr 5 min"; parts at zero are left out, so under a minute is empty.
pub fn play_time(milliseconds: u64) -> String {
    let hours = milliseconds / MS_PER_HOUR;
    let minutes = (milliseconds % MS_PER_HOUR) / MS_PER_MINUTE;
    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{} hr", hours));
    }
    if minutes > 0 {
        parts.push(format!("{} min", minutes));
    }
    parts.join(" ")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn section(doc: &SaveDocument) -> Section {
    let mut section = Section::new(SectionId::Summary);
    section.summary.push(format!(
        "{} of {} Farm ({})",
        doc.player.name,
        doc.player.farm_name,
        doc.farm_type()
    ));
    section.summary.push(format!(
        "Day {} of {}, Year {}",
        doc.day_of_month,
        capitalize(&doc.current_season),
        doc.year
    ));
    section.summary.push(format!(
        "Played for {}",
        play_time(doc.player.milliseconds_played)
    ));
    section
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_time() {
        assert_eq!(play_time(0), "");
        assert_eq!(play_time(59_999), "");
        assert_eq!(play_time(60_000), "1 min");
        assert_eq!(play_time(3_600_000), "1 hr");
        assert_eq!(play_time(3_600_000 * 12 + 60_000 * 5 + 999), "12 hr 5 min");
    }

    #[test]
    fn test_summary_lines() {
        let mut doc = SaveDocument::default();
        doc.player.name = "Ada".into();
        doc.player.farm_name = "Moonfield".into();
        doc.which_farm = 2;
        doc.current_season = "fall".into();
        doc.day_of_month = 14;
        doc.year = 3;
        let section = section(&doc);
        assert_eq!(section.summary[0], "Ada of Moonfield Farm (Forest)");
        assert_eq!(section.summary[1], "Day 14 of Fall, Year 3");
        assert!(section.entries.is_empty());
    }
}
