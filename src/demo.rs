//! The five-step "curiosity to creation" walkthrough.

pub const TYPE_INTERVAL_MS: u32 = 35;
pub const PROCESSING_DELAY_MS: u32 = 1_200;

#[derive(Debug, PartialEq)]
pub struct DemoStep {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub prompt: &'static str,
    pub processing: &'static str,
    pub result: &'static str,
    pub result_icon: &'static str,
    pub instruction: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub static STEPS: [DemoStep; 5] = [
    DemoStep {
        id: "spark",
        title: "Spark",
        subtitle: "A question enters your mind",
        prompt: "What is quantum entanglement and why does it matter?",
        processing: "",
        result: "",
        result_icon: "",
        instruction: "Press Enter or click to capture",
        icon: "✦",
        color: "#f59e0b",
    },
    DemoStep {
        id: "capture",
        title: "Capture",
        subtitle: "Noteshell saves the moment",
        prompt: "",
        processing: "Creating new note...",
        result: "Note created: \"Quantum Entanglement\"",
        result_icon: "📝",
        instruction: "Press Enter to explore",
        icon: "◎",
        color: "#3b82f6",
    },
    DemoStep {
        id: "explore",
        title: "Explore",
        subtitle: "The agent researches deeply",
        prompt: "",
        processing: "Searching 847 sources...",
        result: "Found: 12 articles • 3 videos • 2 papers",
        result_icon: "🔍",
        instruction: "Press Enter to synthesize",
        icon: "◈",
        color: "#8b5cf6",
    },
    DemoStep {
        id: "understand",
        title: "Understand",
        subtitle: "Knowledge crystallizes",
        prompt: "",
        processing: "Synthesizing information...",
        result: "Generated: Summary • Key concepts • Mind map",
        result_icon: "💡",
        instruction: "Press Enter to complete",
        icon: "◇",
        color: "#10b981",
    },
    DemoStep {
        id: "apply",
        title: "Apply",
        subtitle: "Ready to use",
        prompt: "",
        processing: "Preparing study tools...",
        result: "Ready: 8 flashcards • 1 quiz • Structured notes",
        result_icon: "✅",
        instruction: "Press Enter to restart",
        icon: "◫",
        color: "#f59e0b",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Processing,
    Result,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

impl StepStatus {
    pub fn class(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Current => "active",
            Self::Upcoming => "",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoState {
    step: usize,
    typed_chars: usize,
    phase: Phase,
}

impl Default for DemoState {
    fn default() -> Self {
        Self {
            step: 0,
            typed_chars: 0,
            phase: Phase::Typing,
        }
    }
}

impl DemoState {
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn current(&self) -> &'static DemoStep {
        &STEPS[self.step]
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn prompt_len(&self) -> usize {
        self.current().prompt.chars().count()
    }

    pub fn is_typing(&self) -> bool {
        self.phase == Phase::Typing && self.typed_chars < self.prompt_len()
    }

    pub fn typed_text(&self) -> &'static str {
        let prompt = self.current().prompt;
        let end = prompt
            .char_indices()
            .nth(self.typed_chars)
            .map(|(index, _)| index)
            .unwrap_or(prompt.len());
        &prompt[..end]
    }

    /// Types one more character of the prompt. No-op outside the typing phase.
    pub fn typed_one(self) -> Self {
        if !self.is_typing() {
            return self;
        }

        Self {
            typed_chars: self.typed_chars + 1,
            ..self
        }
    }

    pub fn processing_finished(self) -> Self {
        if self.phase != Phase::Processing {
            return self;
        }

        Self {
            phase: Phase::Result,
            ..self
        }
    }

    /// Fast-forwards an unfinished prompt, otherwise moves to the next step and
    /// wraps back to the first step after the last one.
    pub fn advanced(self) -> Self {
        if self.is_typing() {
            return Self {
                typed_chars: self.prompt_len(),
                ..self
            };
        }

        if self.step + 1 < STEPS.len() {
            Self {
                step: self.step + 1,
                typed_chars: 0,
                phase: Phase::Processing,
            }
        } else {
            Self::default()
        }
    }

    pub fn status_of(&self, index: usize) -> StepStatus {
        match index.cmp(&self.step) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Current,
            std::cmp::Ordering::Greater => StepStatus::Upcoming,
        }
    }

    pub fn progress_percent(&self) -> f64 {
        self.step as f64 / (STEPS.len() - 1) as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_out(mut state: DemoState) -> DemoState {
        while state.is_typing() {
            state = state.typed_one();
        }
        state
    }

    #[test]
    fn prompt_types_one_character_at_a_time() {
        let state = DemoState::default().typed_one().typed_one().typed_one();

        assert_eq!(state.typed_text(), "Wha");
        assert!(state.is_typing());
        assert_eq!(type_out(state).typed_text(), STEPS[0].prompt);
    }

    #[test]
    fn advancing_while_typing_fast_forwards_the_prompt() {
        let state = DemoState::default().typed_one().advanced();

        assert_eq!(state.step(), 0);
        assert!(!state.is_typing());
        assert_eq!(state.typed_text(), STEPS[0].prompt);
    }

    #[test]
    fn later_steps_process_then_show_result() {
        let state = type_out(DemoState::default()).advanced();

        assert_eq!(state.step(), 1);
        assert_eq!(state.phase(), Phase::Processing);
        assert_eq!(state.processing_finished().phase(), Phase::Result);
        assert_eq!(state.typed_one(), state);
    }

    #[test]
    fn last_step_wraps_to_start() {
        let mut state = type_out(DemoState::default());
        for _ in 1..STEPS.len() {
            state = state.advanced();
        }
        assert_eq!(state.step(), STEPS.len() - 1);
        assert_eq!(state.progress_percent(), 100.0);

        let restarted = state.advanced();
        assert_eq!(restarted, DemoState::default());
        assert!(restarted.is_typing());
    }

    #[test]
    fn step_statuses_split_around_current() {
        let state = type_out(DemoState::default()).advanced().advanced();

        assert_eq!(state.status_of(0), StepStatus::Completed);
        assert_eq!(state.status_of(2), StepStatus::Current);
        assert_eq!(state.status_of(4), StepStatus::Upcoming);
        assert_eq!(state.progress_percent(), 50.0);
    }
}
