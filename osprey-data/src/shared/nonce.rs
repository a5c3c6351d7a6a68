use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/*----- */
// Nonce generator
/*----- */
// Monotonically increasing nonce for signed requests. Seeded from wall clock
// milliseconds and never repeats, even if the clock steps backwards between
// calls.
#[derive(Debug)]
pub struct NonceGen {
    last: AtomicU64,
}

impl NonceGen {
    pub fn new() -> Self {
        Self {
            last: AtomicU64::new(Utc::now().timestamp_millis() as u64),
        }
    }

    pub fn next(&self) -> u64 {
        let now = Utc::now().timestamp_millis() as u64;
        let prev = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |prev| {
                Some(std::cmp::max(now, prev + 1))
            })
            .unwrap_or(now);
        std::cmp::max(now, prev + 1)
    }
}

impl Default for NonceGen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::NonceGen;

    #[test]
    fn nonces_strictly_increase() {
        let nonce_gen = NonceGen::new();
        let mut prev = nonce_gen.next();
        for _ in 0..1000 {
            let next = nonce_gen.next();
            assert!(next > prev);
            prev = next;
        }
    }

    #[test]
    fn nonce_tracks_wall_clock() {
        let before = chrono::Utc::now().timestamp_millis() as u64;
        let nonce = NonceGen::new().next();
        assert!(nonce >= before);
    }
}
