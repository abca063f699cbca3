use anyhow::{anyhow, Result};
use parking_lot::RwLock;
use std::sync::Arc;

use crate::game::buzz::BuzzType;
use crate::output::{GameOutput, Message};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Entry {
    Text(Message),
    Buzz(BuzzType),
}

#[derive(Clone, Default)]
pub struct MockGameOutput {
    entries: Arc<RwLock<Vec<Entry>>>,
    broken: Arc<RwLock<bool>>,
}

impl MockGameOutput {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn flush(&self) -> Vec<Entry> {
        std::mem::replace(&mut *self.entries.write(), Vec::new())
    }

    pub fn flush_messages(&self) -> Vec<Message> {
        self.flush()
            .into_iter()
            .filter_map(|entry| match entry {
                Entry::Text(message) => Some(message),
                Entry::Buzz(_) => None,
            })
            .collect()
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.entries
            .read()
            .iter()
            .any(|entry| *entry == Entry::Text(message.clone()))
    }

    pub fn buzzes(&self) -> Vec<BuzzType> {
        self.entries
            .read()
            .iter()
            .filter_map(|entry| match entry {
                Entry::Buzz(buzz) => Some(*buzz),
                Entry::Text(_) => None,
            })
            .collect()
    }

    // Every call fails while broken, like a closed terminal
    pub fn set_broken(&self, broken: bool) {
        *self.broken.write() = broken;
    }

    fn check(&self) -> Result<()> {
        if *self.broken.read() {
            Err(anyhow!("Output is broken"))
        } else {
            Ok(())
        }
    }
}

impl GameOutput for MockGameOutput {
    fn say(&self, message: &Message) -> Result<()> {
        self.check()?;
        self.entries.write().push(Entry::Text(message.clone()));
        Ok(())
    }

    fn buzz(&self, buzz: BuzzType) -> Result<()> {
        self.check()?;
        self.entries.write().push(Entry::Buzz(buzz));
        Ok(())
    }
}
