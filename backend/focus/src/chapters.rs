//! The storyboard: every chapter of the page, top to bottom.
use std::time::Duration;

use crate::geometry::Threshold;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowcaseItem {
    pub label: &'static str,
    pub detail: &'static str,
}

/// Items a chapter cycles through while focused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Showcase {
    pub period: Duration,
    pub items: &'static [ShowcaseItem],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chapter {
    pub id: &'static str,
    pub title: &'static str,
    pub focus: Option<Threshold>,
    pub showcase: Option<Showcase>,
}

impl Chapter {
    const fn plain(id: &'static str, title: &'static str) -> Self {
        Self {
            id,
            title,
            focus: None,
            showcase: None,
        }
    }

    const fn focused(id: &'static str, title: &'static str, threshold: Threshold) -> Self {
        Self {
            id,
            title,
            focus: Some(threshold),
            showcase: None,
        }
    }
}

/// Slice of the global scroll progress a chapter owns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChapterSpan {
    pub start: f64,
    pub end: f64,
}

impl ChapterSpan {
    /// Chapter `index` of `count` spans `[index / count, (index + 1) / count]`.
    pub fn of(index: usize, count: usize) -> Self {
        if count == 0 {
            return Self { start: 0.0, end: 0.0 };
        }

        let count = count as f64;
        Self {
            start: index as f64 / count,
            end: (index + 1) as f64 / count,
        }
    }

    /// Half-open, except the span ending at 1 which also owns 1.
    pub fn contains(&self, progress: f64) -> bool {
        progress >= self.start && (progress < self.end || (self.end >= 1.0 && progress <= 1.0))
    }
}

pub const SAMPLE_COMMENTS: [ShowcaseItem; 3] = [
    ShowcaseItem {
        label: "trader_joe",
        detail: "Check out our full breakdown on the tournament dashboard!",
    },
    ShowcaseItem {
        label: "market_maven",
        detail: "Join the live discussion at dayrade.com",
    },
    ShowcaseItem {
        label: "day_gains",
        detail: "See how this played out in today's tournament",
    },
];

pub const LANGUAGES: [ShowcaseItem; 6] = [
    ShowcaseItem {
        label: "EN",
        detail: "Join the tournament!",
    },
    ShowcaseItem {
        label: "ES",
        detail: "¡Únete al torneo!",
    },
    ShowcaseItem {
        label: "ZH",
        detail: "加入比赛！",
    },
    ShowcaseItem {
        label: "AR",
        detail: "انضم إلى البطولة!",
    },
    ShowcaseItem {
        label: "PT",
        detail: "Junte-se ao torneio!",
    },
    ShowcaseItem {
        label: "HI",
        detail: "टूर्नामेंट में शामिल हों!",
    },
];

pub const STORYBOARD: [Chapter; 13] = [
    Chapter::plain("source", "Ingest Sources"),
    Chapter::plain("ai", "Neural Processing"),
    Chapter::focused("film", "Film Strip", Threshold::NARROW),
    Chapter::plain("viral", "Viral Shorts Generation"),
    Chapter::focused("platform", "Multi-Platform Distribution", Threshold::WIDE),
    Chapter {
        id: "engagement",
        title: "Automated Engagement",
        focus: Some(Threshold::WIDE),
        showcase: Some(Showcase {
            period: Duration::from_millis(2500),
            items: &SAMPLE_COMMENTS,
        }),
    },
    Chapter {
        id: "global",
        title: "Global Content Empire",
        focus: Some(Threshold::WIDE),
        showcase: Some(Showcase {
            period: Duration::from_millis(2000),
            items: &LANGUAGES,
        }),
    },
    Chapter::focused("dashboard", "Analytics Dashboard", Threshold::NARROW),
    Chapter::plain("locked", "Verification Locked"),
    Chapter::plain("unlocked", "Access Granted"),
    Chapter::plain("verified", "Verified Creator"),
    Chapter::plain("join", "Join the Tournament"),
    Chapter::plain("loop", "Continuous Loop"),
];

pub fn chapter(id: &str) -> Option<&'static Chapter> {
    STORYBOARD.iter().find(|chapter| chapter.id == id)
}
