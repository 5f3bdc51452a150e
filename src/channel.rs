use std::collections::HashMap;

use crate::scan::MediaFile;

/// Videos sharing the same filename prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub name: String,
    pub videos: Vec<MediaFile>,
}

impl Channel {
    /// Oldest first; videos with equal timestamps keep their scan order.
    pub fn sorted_by_creation(&self) -> Vec<&MediaFile> {
        let mut videos: Vec<&MediaFile> = self.videos.iter().collect();
        videos.sort_by_key(|video| video.created);
        videos
    }

    /// The file name without the leading `<channel>_`.
    pub fn display_name<'a>(&self, video: &'a MediaFile) -> &'a str {
        video
            .name
            .strip_prefix(self.name.as_str())
            .and_then(|rest| rest.strip_prefix('_'))
            .unwrap_or(&video.name)
    }
}

/// Everything before the first `_`, or the whole name when there is none.
pub fn channel_key(file_name: &str) -> &str {
    match file_name.split_once('_') {
        Some((key, _)) => key,
        None => file_name,
    }
}

/// Groups videos by channel key; channels keep the order in which their key
/// was first seen.
pub fn group_by_channel(videos: Vec<MediaFile>) -> Vec<Channel> {
    let mut channels: Vec<Channel> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for video in videos {
        let key = channel_key(&video.name).to_string();
        match positions.get(&key) {
            Some(&pos) => channels[pos].videos.push(video),
            None => {
                positions.insert(key.clone(), channels.len());
                channels.push(Channel {
                    name: key,
                    videos: vec![video],
                });
            }
        }
    }

    channels
}
