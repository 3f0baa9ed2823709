use crate::error::ArgumentError;
use serde::{Deserialize, Serialize};

/// How [`separate`] splits a string: chunks of `group_size` characters joined by `splitter`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GroupingOptions {
    pub splitter: String,
    pub group_size: usize,
}

impl Default for GroupingOptions {
    /// Thousands grouping: `","` every `3` characters.
    fn default() -> Self {
        Self {
            splitter: ",".to_string(),
            group_size: 3,
        }
    }
}

impl GroupingOptions {
    /// Card number grouping: `" "` every `4` characters.
    pub fn card() -> Self {
        Self {
            splitter: " ".to_string(),
            group_size: 4,
        }
    }

    pub fn splitter(&self, splitter: impl Into<String>) -> Self {
        let splitter = splitter.into();
        self.mutate_clone(|x| x.splitter = splitter)
    }

    pub fn group_size(&self, group_size: usize) -> Self {
        self.mutate_clone(|x| x.group_size = group_size)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

/// Split `text` from the left into chunks of `group_size` characters; the last chunk may be shorter.
pub fn separate(text: &str, options: GroupingOptions) -> Result<String, ArgumentError> {
    if options.group_size == 0 {
        return Err(ArgumentError::GroupSizeZero);
    }
    let chars: Vec<char> = text.chars().collect();
    let groups: Vec<String> = chars
        .chunks(options.group_size)
        .map(|chunk| chunk.iter().collect())
        .collect();
    Ok(groups.join(options.splitter.as_str()))
}
