use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Joke {
    pub id: &'static str,
    pub joke: &'static str,
}

pub const JOKES: &[Joke] = &[
    Joke {
        id: "0189hNRf2g",
        joke: "I'm tired of following my dreams. I'm just going to ask them where they are going and meet up with them later.",
    },
    Joke {
        id: "08EQZ8EQukb",
        joke: "Did you hear about the guy whose whole left side was cut off? He's all right now.",
    },
    Joke {
        id: "08xHQCdx5Ed",
        joke: "Why didn't the skeleton cross the road? Because he had no guts.",
    },
];
