//! Static copy and data tables for the landing page.

use std::num::NonZeroUsize;

pub const PRODUCT_NAME: &str = "Noteshell";
pub const WAITLIST_FORM_URL: &str =
    "https://docs.google.com/forms/d/e/1FAIpQLSfyEoHmFAXD0plWwSXWNrm6PYz4QYSThChYDGvr4k67cPlzKQ/viewform";

/// One content and visual pair of the sticky features section.
#[derive(Debug, PartialEq)]
pub struct FeatureSlide {
    pub number: &'static str,
    pub label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub metric: &'static str,
    pub metric_unit: &'static str,
    pub metric_label: &'static str,
    pub icon: &'static str,
    pub caption: &'static str,
    pub visual: &'static str,
}

pub static FEATURE_SLIDES: [FeatureSlide; 3] = [
    FeatureSlide {
        number: "01",
        label: "ACCELERATE",
        title: "Turn learning into your fastest task",
        description: "For too long, learning felt like work: searching, sketching, digesting, revising. Noteshell automates the heavy lifting so learning feels natural and enjoyable.",
        metric: "60→10",
        metric_unit: "min",
        metric_label: "Turn an hour of scattered learning into 10 minutes of structured clarity.",
        icon: "⚡",
        caption: "Acceleration in progress",
        visual: "/visuals/accelerate.svg",
    },
    FeatureSlide {
        number: "02",
        label: "CAPTURE",
        title: "Built for the moment you get curious",
        description: "The core idea is simple: capture the very first spark in your mind, explain it clearly, and save it into a complete knowledge vault, all in seconds.",
        metric: "<3",
        metric_unit: "sec",
        metric_label: "From thought to structured note in the blink of an eye.",
        icon: "✦",
        caption: "Capturing spark",
        visual: "/visuals/capture.svg",
    },
    FeatureSlide {
        number: "03",
        label: "EXPLORE",
        title: "An agent companion beyond the obvious",
        description: "Dive into any concept and build a foundation from the roots, using deep research and synthesis across your sources and the entire web.",
        metric: "∞",
        metric_unit: "depth",
        metric_label: "No ceiling on how deep you can go. The agent grows with you.",
        icon: "◉",
        caption: "Exploring depths",
        visual: "/visuals/explore.svg",
    },
];

pub fn feature_slide_count() -> NonZeroUsize {
    NonZeroUsize::new(FEATURE_SLIDES.len()).unwrap_or(NonZeroUsize::MIN)
}

#[derive(Debug, PartialEq)]
pub struct HeroMetric {
    pub value: &'static str,
    pub label: &'static str,
}

pub static HERO_METRICS: [HeroMetric; 3] = [
    HeroMetric {
        value: "10min",
        label: "avg. learning time",
    },
    HeroMetric {
        value: "∞",
        label: "topics to explore",
    },
    HeroMetric {
        value: "1",
        label: "curious mind",
    },
];

/// In-page anchors listed in the navigation bar.
pub static NAV_SECTIONS: [&str; 3] = ["journey", "demo", "pricing"];

/// `#id` when already on the home page, `/#id` from any other route.
pub fn section_href(on_home: bool, section_id: &str) -> String {
    if on_home {
        format!("#{section_id}")
    } else {
        format!("/#{section_id}")
    }
}

/// Element id named by a location hash, if any.
pub fn hash_target(hash: &str) -> Option<&str> {
    let id = hash.strip_prefix('#').unwrap_or(hash).trim();
    (!id.is_empty()).then_some(id)
}

#[derive(Debug, PartialEq)]
pub struct Pillar {
    pub label: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub capabilities: [&'static str; 3],
}

pub static PILLARS: [Pillar; 3] = [
    Pillar {
        label: "Research",
        icon: "◎",
        title: "Deep research synthesis",
        description: "Researches across your sources and the web. Synthesizes findings into structured knowledge.",
        capabilities: ["Source cross-referencing", "Citation tracking", "Knowledge graphs"],
    },
    Pillar {
        label: "Recommend",
        icon: "◈",
        title: "Intelligent recommendations",
        description: "Recommends the next best video, article, or course based on your goal.",
        capabilities: ["Personalized paths", "Gap detection", "Progress tracking"],
    },
    Pillar {
        label: "Generate",
        icon: "◇",
        title: "Study tool generation",
        description: "Generates flashcards, quizzes, summaries, and mind maps automatically.",
        capabilities: ["Auto flashcards", "Practice tests", "Visual summaries"],
    },
];

pub const TRIANGLE_SIZE: f64 = 280.0;
const TRIANGLE_INSET: f64 = 45.0;

/// Center of pillar node `index` on the triangle, first node at twelve o'clock.
pub fn triangle_node_position(index: usize, size: f64) -> (f64, f64) {
    let center = size / 2.0;
    let radius = triangle_radius(size);
    let angle = (index as f64 * 120.0 - 90.0).to_radians();

    (center + radius * angle.cos(), center + radius * angle.sin())
}

pub fn triangle_radius(size: f64) -> f64 {
    size / 2.0 - TRIANGLE_INSET
}

#[derive(Debug, PartialEq)]
pub struct LearningMode {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub image_alt: &'static str,
}

pub static LEARNING_MODES: [LearningMode; 6] = [
    LearningMode {
        id: "video",
        label: "Video-first",
        icon: "▶",
        description: "Learn through curated video content and visual explanations.",
        image_alt: "Video learning interface",
    },
    LearningMode {
        id: "slides",
        label: "Slides-first",
        icon: "◧",
        description: "Structured presentations for systematic learning.",
        image_alt: "Slide presentation view",
    },
    LearningMode {
        id: "research",
        label: "Deep research",
        icon: "◉",
        description: "Long-form articles and academic papers.",
        image_alt: "Research documentation",
    },
    LearningMode {
        id: "practice",
        label: "Practice mode",
        icon: "◈",
        description: "Interactive quizzes and problem solving.",
        image_alt: "Practice interface",
    },
    LearningMode {
        id: "project",
        label: "Project workspace",
        icon: "◫",
        description: "Organized spaces for building.",
        image_alt: "Project workspace",
    },
    LearningMode {
        id: "flow",
        label: "Go with the flow",
        icon: "∿",
        description: "Spontaneous exploration.",
        image_alt: "Free exploration",
    },
];

/// Clicking the selected card clears the selection.
pub fn toggle_selection(current: Option<&'static str>, clicked: &'static str) -> Option<&'static str> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Debug, PartialEq)]
pub struct Belief {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static BELIEFS: [Belief; 3] = [
    Belief {
        icon: "⚡",
        title: "Speed of thought",
        description: "Learning should never wait on loading screens. Noteshell captures your ideas the instant they form, so momentum is never broken.",
    },
    Belief {
        icon: "🔭",
        title: "Curiosity-first",
        description: "We design for the spark, not the syllabus. Every feature exists to help you follow a question wherever it leads.",
    },
    Belief {
        icon: "∞",
        title: "Boundless depth",
        description: "Surface-level knowledge fades. Noteshell helps you build layered understanding that compounds over time.",
    },
];

pub static FOOTER_LINKS: [&str; 4] = ["Privacy", "Terms", "Twitter", "GitHub"];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

const fn point(x: f64, y: f64) -> Point {
    Point { x, y }
}

pub static CONSTELLATION_POINTS: [Point; 27] = [
    point(12.0, 15.0),
    point(16.0, 22.0),
    point(21.0, 18.0),
    point(24.0, 26.0),
    point(72.0, 12.0),
    point(76.0, 17.0),
    point(81.0, 13.0),
    point(78.0, 21.0),
    point(42.0, 72.0),
    point(46.0, 78.0),
    point(51.0, 75.0),
    point(48.0, 83.0),
    point(86.0, 62.0),
    point(91.0, 66.0),
    point(88.0, 71.0),
    point(8.0, 55.0),
    point(12.0, 60.0),
    point(15.0, 55.0),
    point(58.0, 35.0),
    point(63.0, 38.0),
    point(60.0, 43.0),
    point(28.0, 45.0),
    point(33.0, 50.0),
    point(30.0, 55.0),
    point(92.0, 35.0),
    point(96.0, 40.0),
    point(94.0, 45.0),
];

pub static CONSTELLATION_LINES: [(usize, usize); 21] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (4, 5),
    (5, 6),
    (6, 7),
    (5, 7),
    (8, 9),
    (9, 10),
    (10, 11),
    (9, 11),
    (12, 13),
    (13, 14),
    (15, 16),
    (16, 17),
    (18, 19),
    (19, 20),
    (21, 22),
    (22, 23),
    (24, 25),
    (25, 26),
];

pub const STAR_COUNT: usize = 100;

/// A twinkling star; positions are percentages of the viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub duration: f64,
    pub delay: f64,
}

impl Star {
    /// Builds a star from five uniform samples in `[0, 1)`.
    pub fn from_samples(id: usize, samples: [f64; 5]) -> Self {
        let [x, y, size, duration, delay] = samples.map(|value| value.clamp(0.0, 1.0));

        Self {
            id,
            x: x * 100.0,
            y: y * 100.0,
            size: size * 1.5 + 0.5,
            duration: duration * 5.0 + 3.0,
            delay: delay * 4.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hrefs_stay_in_page_only_on_home() {
        assert_eq!(section_href(true, "journey"), "#journey");
        assert_eq!(section_href(false, "pricing"), "/#pricing");
    }

    #[test]
    fn hash_target_strips_marker_and_rejects_empty() {
        assert_eq!(hash_target("#demo"), Some("demo"));
        assert_eq!(hash_target("demo"), Some("demo"));
        assert_eq!(hash_target("#"), None);
        assert_eq!(hash_target(""), None);
    }

    #[test]
    fn triangle_nodes_sit_on_the_circle() {
        let (top_x, top_y) = triangle_node_position(0, TRIANGLE_SIZE);
        assert!((top_x - 140.0).abs() < 1e-9);
        assert!((top_y - 45.0).abs() < 1e-9);

        for index in 0..PILLARS.len() {
            let (x, y) = triangle_node_position(index, TRIANGLE_SIZE);
            let distance = ((x - 140.0).powi(2) + (y - 140.0).powi(2)).sqrt();
            assert!((distance - triangle_radius(TRIANGLE_SIZE)).abs() < 1e-9);
        }
    }

    #[test]
    fn selecting_the_same_mode_twice_clears_it() {
        let selected = toggle_selection(None, "video");
        assert_eq!(selected, Some("video"));
        assert_eq!(toggle_selection(selected, "flow"), Some("flow"));
        assert_eq!(toggle_selection(selected, "video"), None);
    }

    #[test]
    fn constellation_lines_reference_existing_points() {
        for (a, b) in CONSTELLATION_LINES {
            assert!(a < CONSTELLATION_POINTS.len());
            assert!(b < CONSTELLATION_POINTS.len());
        }
    }

    #[test]
    fn star_samples_map_into_documented_ranges() {
        let low = Star::from_samples(0, [0.0; 5]);
        let high = Star::from_samples(1, [1.0; 5]);

        assert_eq!((low.size, low.duration, low.delay), (0.5, 3.0, 0.0));
        assert_eq!((high.x, high.size, high.duration, high.delay), (100.0, 2.0, 8.0, 4.0));
    }

    #[test]
    fn every_slide_has_a_visual() {
        assert_eq!(feature_slide_count().get(), 3);
        assert!(FEATURE_SLIDES
            .iter()
            .all(|slide| slide.visual.starts_with("/visuals/") && slide.visual.ends_with(".svg")));
    }
}
