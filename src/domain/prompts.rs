//! Writing prompts and random selection

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixed prompt list shown to users who need a nudge to start writing.
pub const WRITING_PROMPTS: [&str; 20] = [
    "What made you smile today? Describe that moment in detail.",
    "Write about a challenge you're facing and how you might overcome it.",
    "Describe three things you're grateful for right now and why.",
    "What would you tell your younger self about the situation you're in today?",
    "Write about a person who positively influenced you recently.",
    "What are you most proud of accomplishing this week?",
    "Describe a moment when you felt completely at peace.",
    "What's one thing you'd like to improve about yourself, and what's your first step?",
    "Write about something you're looking forward to.",
    "What lessons have you learned from your recent experiences?",
    "Describe how you're feeling right now without judging those feelings.",
    "What would your ideal day look like from start to finish?",
    "Write about a time you showed kindness to yourself or others.",
    "What are three words that describe how you want to feel, and what can help you get there?",
    "Reflect on a difficult emotion you've experienced recently. What was it trying to tell you?",
    "What boundaries do you need to set for your mental health?",
    "Write about something you've been avoiding and why.",
    "What gives your life meaning and purpose?",
    "Describe a recent accomplishment, no matter how small.",
    "What do you need to let go of to move forward?",
];

/// Picks writing prompts uniformly at random, with replacement.
///
/// The randomness source is injected so tests can seed it; no other state
/// is carried between calls.
pub struct PromptProvider<R: Rng> {
    rng: R,
}

impl PromptProvider<StdRng> {
    /// Provider backed by OS entropy.
    pub fn from_entropy() -> Self {
        PromptProvider::new(StdRng::from_entropy())
    }

    /// Provider with a fixed seed, for reproducible selection.
    pub fn seeded(seed: u64) -> Self {
        PromptProvider::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PromptProvider<R> {
    pub fn new(rng: R) -> Self {
        PromptProvider { rng }
    }

    /// Return one prompt from the fixed list.
    pub fn next_prompt(&mut self) -> &'static str {
        WRITING_PROMPTS[self.rng.gen_range(0..WRITING_PROMPTS.len())]
    }
}
