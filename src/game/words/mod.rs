use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::VecDeque;


pub const WORDS: [&str; 21] = [
    "queen",
    "hospital",
    "basketball",
    "cat",
    "change",
    "snail",
    "soup",
    "calendar",
    "sad",
    "desk",
    "guitar",
    "home",
    "railway",
    "zebra",
    "jelly",
    "car",
    "crow",
    "trade",
    "bag",
    "roll",
    "bubble",
];

/// Shuffled words waiting to be guessed. The front is the next word.
#[derive(Debug)]
pub struct WordQueue {
    words: VecDeque<&'static str>,
    rng: StdRng,
    shuffle_count: u32,
}

impl WordQueue {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut queue = WordQueue {
            words: VecDeque::with_capacity(WORDS.len()),
            rng,
            shuffle_count: 0,
        };
        queue.reset();
        queue
    }

    pub fn reset(&mut self) {
        let mut words = WORDS.to_vec();
        words.shuffle(&mut self.rng);
        self.words = words.into_iter().collect();
        self.shuffle_count += 1;
        debug!("Word list shuffled ({} times)", self.shuffle_count());
    }

    // Refills and reshuffles when exhausted, so this never comes up empty
    pub fn next_word(&mut self) -> &'static str {
        loop {
            if self.is_empty() {
                debug!("Word list exhausted, reshuffling");
                self.reset();
            }
            if let Some(word) = self.words.pop_front() {
                return word;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn shuffle_count(&self) -> u32 {
        self.shuffle_count
    }
}
