//! Sample catalog records loaded when `seed_sample_data` is enabled.
use crate::model::{GameSystem, VideoGame};

pub fn sample_game_systems() -> Vec<GameSystem> {
    vec![
        GameSystem {
            id: "AAAA1".to_string(),
            name: "Nintendo Super NES".to_string(),
            description: "A Nintendo 16 bits console".to_string(),
            image: "images/snes.png".to_string(),
        },
        GameSystem {
            id: "AAAA2".to_string(),
            name: "Sega Mega Drive".to_string(),
            description: "A Sega 16 bits console".to_string(),
            image: "images/megadrive.png".to_string(),
        },
        GameSystem {
            id: "AAAA3".to_string(),
            name: "Sony PlayStation".to_string(),
            description: "A Sony 32 bits console".to_string(),
            image: "images/playstation.png".to_string(),
        },
    ]
}

pub fn sample_video_games() -> Vec<VideoGame> {
    vec![
        VideoGame {
            id: "BBBB1".to_string(),
            name: "Super Mario World".to_string(),
            developer: "Nintendo".to_string(),
            gamesystem: "Nintendo Super NES".to_string(),
            genre: "Platforms".to_string(),
            year: 1990,
            image: "images/smw.png".to_string(),
        },
        VideoGame {
            id: "BBBB2".to_string(),
            name: "Sonic the Hedgehog".to_string(),
            developer: "Sega".to_string(),
            gamesystem: "Sega Mega Drive".to_string(),
            genre: "Platforms".to_string(),
            year: 1991,
            image: "images/sonic.png".to_string(),
        },
        VideoGame {
            id: "BBBB3".to_string(),
            name: "Final Fantasy VII".to_string(),
            developer: "Square".to_string(),
            gamesystem: "Sony PlayStation".to_string(),
            genre: "Rol".to_string(),
            year: 1997,
            image: "images/ff7.png".to_string(),
        },
    ]
}
