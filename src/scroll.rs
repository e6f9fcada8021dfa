use std::num::NonZeroUsize;

/// Minimum change in progress worth publishing to the renderer.
pub const PUBLISH_EPSILON: f64 = 0.001;
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Layout of a scroll-driven section, in document coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionGeometry {
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

impl SectionGeometry {
    pub fn new(top: f64, height: f64, viewport_height: f64) -> Self {
        Self {
            top,
            height,
            viewport_height,
        }
    }

    fn scroll_range(&self) -> f64 {
        self.height - self.viewport_height
    }

    /// Fraction of the section scrolled past, clamped to `[0, 1]`.
    ///
    /// A section no taller than the viewport has no scroll range and always
    /// reports 0.
    pub fn progress_at(&self, scroll_offset: f64) -> f64 {
        let range = self.scroll_range();
        if !(range > 0.0) || !range.is_finite() {
            return 0.0;
        }

        clamp_unit((scroll_offset - self.top) / range)
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

pub fn scroll_progress(scroll_offset: f64, geometry: &SectionGeometry) -> f64 {
    geometry.progress_at(scroll_offset)
}

/// Maps progress onto `slide_count` equal buckets. The last bucket is closed
/// so a progress of exactly 1.0 stays on the final slide.
pub fn active_index(progress: f64, slide_count: NonZeroUsize) -> usize {
    let count = slide_count.get();
    let bucket = (clamp_unit(progress) * count as f64).floor() as usize;
    bucket.min(count - 1)
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideVisibility {
    Active,
    Inactive,
}

impl SlideVisibility {
    pub fn for_slide(index: usize, active_index: usize) -> Self {
        if index == active_index {
            Self::Active
        } else {
            Self::Inactive
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Active => "is-active",
            Self::Inactive => "is-inactive",
        }
    }

    pub fn aria_hidden(self) -> &'static str {
        match self {
            Self::Active => "false",
            Self::Inactive => "true",
        }
    }
}

pub fn slide_visibilities(
    active_index: usize,
    slide_count: usize,
) -> impl Iterator<Item = SlideVisibility> {
    (0..slide_count).map(move |index| SlideVisibility::for_slide(index, active_index))
}

/// Collapses bursts of events into one pending animation frame.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    /// Returns `true` when the caller has to schedule a frame callback.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }

        self.pending = true;
        true
    }

    pub fn begin_frame(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Turns raw scroll and resize notifications into published progress values.
///
/// Scroll events only record the latest offset. The host schedules a frame
/// whenever [`ProgressSampler::on_scroll`] or [`ProgressSampler::on_resize`]
/// returns `true`, and calls [`ProgressSampler::on_frame`] from that frame.
#[derive(Debug)]
pub struct ProgressSampler {
    geometry: SectionGeometry,
    latest_offset: f64,
    throttle: FrameThrottle,
    published: Option<f64>,
    epsilon: f64,
}

impl ProgressSampler {
    pub fn new(geometry: SectionGeometry) -> Self {
        Self {
            geometry,
            latest_offset: 0.0,
            throttle: FrameThrottle::default(),
            published: None,
            epsilon: PUBLISH_EPSILON,
        }
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon.max(0.0);
        self
    }

    pub fn on_scroll(&mut self, scroll_offset: f64) -> bool {
        self.latest_offset = scroll_offset;
        self.throttle.request()
    }

    pub fn on_resize(&mut self, geometry: SectionGeometry) -> bool {
        self.geometry = geometry;
        self.throttle.request()
    }

    pub fn on_frame(&mut self) -> Option<f64> {
        self.throttle.begin_frame();
        let next = self.geometry.progress_at(self.latest_offset);

        let worth_publishing = match self.published {
            None => true,
            Some(previous) if previous == next => false,
            Some(previous) => {
                (next - previous).abs() >= self.epsilon || next == 0.0 || next == 1.0
            }
        };

        if !worth_publishing {
            return None;
        }

        self.published = Some(next);
        Some(next)
    }

    pub fn published(&self) -> Option<f64> {
        self.published
    }

    pub fn geometry(&self) -> SectionGeometry {
        self.geometry
    }

    pub fn frame_pending(&self) -> bool {
        self.throttle.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn four() -> NonZeroUsize {
        NonZeroUsize::new(4).expect("non-zero")
    }

    fn tall_section() -> SectionGeometry {
        SectionGeometry::new(1_000.0, 3_000.0, 800.0)
    }

    #[test]
    fn progress_is_zero_before_section_and_one_after() {
        let geometry = tall_section();

        assert_eq!(geometry.progress_at(0.0), 0.0);
        assert_eq!(geometry.progress_at(1_000.0), 0.0);
        assert_eq!(geometry.progress_at(2_100.0), 0.5);
        assert_eq!(geometry.progress_at(3_200.0), 1.0);
        assert_eq!(geometry.progress_at(50_000.0), 1.0);
    }

    #[test]
    fn short_section_has_no_progress() {
        let equal = SectionGeometry::new(200.0, 800.0, 800.0);
        let shorter = SectionGeometry::new(200.0, 400.0, 800.0);

        for offset in [0.0, 200.0, 600.0, 10_000.0] {
            assert_eq!(scroll_progress(offset, &equal), 0.0);
            assert_eq!(scroll_progress(offset, &shorter), 0.0);
        }
    }

    #[test]
    fn non_finite_geometry_degrades_to_zero() {
        let geometry = SectionGeometry::new(0.0, f64::INFINITY, 800.0);
        assert_eq!(geometry.progress_at(400.0), 0.0);

        let geometry = SectionGeometry::new(f64::NAN, 2_000.0, 800.0);
        assert_eq!(geometry.progress_at(400.0), 0.0);
    }

    #[test]
    fn buckets_split_progress_evenly() {
        assert_eq!(active_index(0.0, four()), 0);
        assert_eq!(active_index(0.24, four()), 0);
        assert_eq!(active_index(0.25, four()), 1);
        assert_eq!(active_index(0.5, four()), 2);
        assert_eq!(active_index(0.99, four()), 3);
        assert_eq!(active_index(1.0, four()), 3);
    }

    #[test]
    fn out_of_range_progress_is_clamped_before_mapping() {
        assert_eq!(active_index(-0.5, four()), 0);
        assert_eq!(active_index(7.0, four()), 3);
        assert_eq!(active_index(f64::NAN, four()), 0);
    }

    #[test]
    fn single_slide_is_always_active() {
        let one = NonZeroUsize::new(1).expect("non-zero");

        assert_eq!(active_index(0.0, one), 0);
        assert_eq!(active_index(1.0, one), 0);
    }

    #[test]
    fn nav_turns_opaque_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn visibility_marks_only_the_matching_slide() {
        let states: Vec<_> = slide_visibilities(1, 3).collect();

        assert_eq!(
            states,
            vec![
                SlideVisibility::Inactive,
                SlideVisibility::Active,
                SlideVisibility::Inactive
            ]
        );
        assert_eq!(states[1].class(), "is-active");
        assert_eq!(states[0].aria_hidden(), "true");
    }

    #[test]
    fn burst_of_scroll_events_requests_one_frame() {
        let mut sampler = ProgressSampler::new(tall_section());

        let requested = (0..100)
            .map(|step| sampler.on_scroll(1_000.0 + f64::from(step) * 5.0))
            .filter(|requested| *requested)
            .count();

        assert_eq!(requested, 1);
        assert!(sampler.frame_pending());

        let published = sampler.on_frame();
        assert_eq!(published, Some(tall_section().progress_at(1_495.0)));
        assert!(!sampler.frame_pending());
        assert_eq!(sampler.on_frame(), None);
    }

    #[test]
    fn first_frame_always_publishes() {
        let mut sampler = ProgressSampler::new(tall_section());

        assert!(sampler.on_scroll(0.0));
        assert_eq!(sampler.on_frame(), Some(0.0));
        assert_eq!(sampler.published(), Some(0.0));
    }

    #[test]
    fn tiny_changes_are_not_republished() {
        let mut sampler = ProgressSampler::new(tall_section());
        sampler.on_scroll(2_100.0);
        assert_eq!(sampler.on_frame(), Some(0.5));

        // 1px over a 2200px range is below the epsilon.
        sampler.on_scroll(2_101.0);
        assert_eq!(sampler.on_frame(), None);
        assert_eq!(sampler.published(), Some(0.5));

        sampler.on_scroll(2_150.0);
        assert!(sampler.on_frame().is_some());
    }

    #[test]
    fn reaching_an_endpoint_is_always_published() {
        let mut sampler = ProgressSampler::new(tall_section()).with_epsilon(0.5);
        sampler.on_scroll(3_000.0);
        let near_end = sampler.on_frame().expect("first publish");
        assert!(near_end < 1.0);

        sampler.on_scroll(3_200.0);
        assert_eq!(sampler.on_frame(), Some(1.0));
    }

    #[test]
    fn resize_replaces_cached_geometry_and_requests_frame() {
        let mut sampler = ProgressSampler::new(SectionGeometry::default());
        sampler.on_scroll(2_100.0);
        assert_eq!(sampler.on_frame(), Some(0.0));

        assert!(sampler.on_resize(tall_section()));
        assert_eq!(sampler.geometry(), tall_section());
        assert_eq!(sampler.on_frame(), Some(0.5));
    }

    proptest! {
        #[test]
        fn progress_stays_in_unit_range(
            offset in -1.0e6f64..1.0e6,
            top in 0.0f64..1.0e5,
            height in 0.0f64..1.0e5,
            viewport in 0.0f64..5.0e3,
        ) {
            let progress = SectionGeometry::new(top, height, viewport).progress_at(offset);
            prop_assert!((0.0..=1.0).contains(&progress));
        }

        #[test]
        fn progress_is_monotonic_in_offset(
            a in 0.0f64..1.0e5,
            b in 0.0f64..1.0e5,
            top in 0.0f64..1.0e4,
            height in 0.0f64..1.0e5,
            viewport in 1.0f64..5.0e3,
        ) {
            let geometry = SectionGeometry::new(top, height, viewport);
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(geometry.progress_at(low) <= geometry.progress_at(high));
        }

        #[test]
        fn degenerate_section_reports_zero(
            offset in -1.0e6f64..1.0e6,
            height in 0.0f64..2.0e3,
            extra in 0.0f64..2.0e3,
        ) {
            let geometry = SectionGeometry::new(100.0, height, height + extra);
            prop_assert_eq!(geometry.progress_at(offset), 0.0);
        }

        #[test]
        fn exactly_one_slide_is_active(progress in 0.0f64..=1.0, count in 1usize..12) {
            let slides = NonZeroUsize::new(count).expect("non-zero");
            let active = active_index(progress, slides);

            prop_assert!(active < count);
            prop_assert_eq!(active, active_index(progress, slides));
            let active_flags = slide_visibilities(active, count)
                .filter(|state| state.is_active())
                .count();
            prop_assert_eq!(active_flags, 1);
        }
    }
}
