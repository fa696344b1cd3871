mod animation_clock;

pub use animation_clock::AnimationClock;
