//! Natelly is a voice-guided object identifier for visually impaired users:
//! capture or pick a photo, submit it to a remote classification service,
//! narrate the result with speech and haptic feedback.

pub mod module;
