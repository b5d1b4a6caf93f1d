//! Cover images for interview cards.

/// Decorative covers, unrelated to record identity.
pub const INTERVIEW_COVERS: &[&str] = &[
    "/covers/adobe.png",
    "/covers/amazon.png",
    "/covers/facebook.png",
    "/covers/hostinger.png",
    "/covers/pinterest.png",
    "/covers/quora.png",
    "/covers/reddit.png",
    "/covers/skype.png",
    "/covers/spotify.png",
    "/covers/telegram.png",
    "/covers/tiktok.png",
    "/covers/yahoo.png",
];

/// Pick a cover for one card render. Keyed only by invocation, so repeated
/// renders vary.
pub fn random_interview_cover() -> &'static str {
    INTERVIEW_COVERS[random_index(INTERVIEW_COVERS.len())]
}

#[cfg(target_arch = "wasm32")]
fn random_index(len: usize) -> usize {
    (js_sys::Math::random() * len as f64) as usize % len
}

#[cfg(not(target_arch = "wasm32"))]
fn random_index(len: usize) -> usize {
    use rand::Rng;
    rand::thread_rng().gen_range(0..len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_always_comes_from_the_fixed_set() {
        for _ in 0..100 {
            assert!(INTERVIEW_COVERS.contains(&random_interview_cover()));
        }
    }
}
