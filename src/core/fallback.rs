//! Keyword fallback resolution
//!
//! Maps a free-text prompt to a canned media URL. Used as the primary
//! behaviour for music and video, which have no live provider.
//!
//! Tables are scanned in declaration order and the first keyword found
//! anywhere in the lowercased prompt wins. Order is part of the contract:
//! "ocean at sunset" resolves to the `sunset` entry because `sunset` is
//! declared before `ocean`.

/// Static keyword to URL table with a default
#[derive(Debug, Clone, Copy)]
pub struct KeywordTable {
    entries: &'static [(&'static str, &'static str)],
    default_url: &'static str,
}

impl KeywordTable {
    /// Keywords must be lowercase
    pub const fn new(
        entries: &'static [(&'static str, &'static str)],
        default_url: &'static str,
    ) -> Self {
        Self {
            entries,
            default_url,
        }
    }

    /// Resolve a prompt to a URL. Total: always returns exactly one URL.
    pub fn resolve(&self, prompt: &str) -> &'static str {
        self.matching_keyword(prompt)
            .map(|(_, url)| url)
            .unwrap_or(self.default_url)
    }

    /// First `(keyword, url)` entry contained in the prompt, if any
    pub fn matching_keyword(&self, prompt: &str) -> Option<(&'static str, &'static str)> {
        let prompt = prompt.to_lowercase();
        self.entries
            .iter()
            .find(|(keyword, _)| prompt.contains(keyword))
            .copied()
    }

    pub fn default_url(&self) -> &'static str {
        self.default_url
    }

    pub fn keywords(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(keyword, _)| *keyword)
    }
}

/// Default clip returned when no music keyword matches
pub const DEFAULT_AUDIO_URL: &str = "https://www2.cs.uic.edu/~i101/SoundFiles/StarWars3.wav";

/// Default clip returned when no video keyword matches
pub const DEFAULT_VIDEO_URL: &str =
    "https://sample-videos.com/video123/mp4/720/big_buck_bunny_720p_1mb.mp4";

/// Music keywords, in resolution order:
/// piano, guitar, violin, orchestra, jazz, drum, electronic, ambient, rock
pub static MUSIC_TABLE: KeywordTable = KeywordTable::new(
    &[
        ("piano", "https://www2.cs.uic.edu/~i101/SoundFiles/PinkPanther30.wav"),
        ("guitar", "https://www2.cs.uic.edu/~i101/SoundFiles/CantinaBand60.wav"),
        ("violin", "https://www2.cs.uic.edu/~i101/SoundFiles/ImperialMarch60.wav"),
        ("orchestra", "https://www2.cs.uic.edu/~i101/SoundFiles/Fanfare60.wav"),
        ("jazz", "https://www2.cs.uic.edu/~i101/SoundFiles/BabyElephantWalk60.wav"),
        ("drum", "https://www2.cs.uic.edu/~i101/SoundFiles/CantinaBand3.wav"),
        ("electronic", "https://www2.cs.uic.edu/~i101/SoundFiles/StarWars60.wav"),
        ("ambient", "https://www2.cs.uic.edu/~i101/SoundFiles/PinkPanther60.wav"),
        ("rock", "https://www2.cs.uic.edu/~i101/SoundFiles/ImperialMarch60.wav"),
    ],
    DEFAULT_AUDIO_URL,
);

/// Video keywords, in resolution order:
/// sunset, ocean, city, forest, space, fire, car, animation
pub static VIDEO_TABLE: KeywordTable = KeywordTable::new(
    &[
        ("sunset", "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerEscapes.mp4"),
        ("ocean", "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerMeltdowns.mp4"),
        ("city", "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/WeAreGoingOnBullrun.mp4"),
        ("forest", "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4"),
        ("space", "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/TearsOfSteel.mp4"),
        ("fire", "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerBlazes.mp4"),
        ("car", "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/SubaruOutbackOnStreetAndDirt.mp4"),
        ("animation", "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4"),
    ],
    DEFAULT_VIDEO_URL,
);
