use crate::error::{Error, Stage};

/// Five lines of art, one per report line, and the colour used to tint them.
#[derive(Debug, PartialEq, Eq)]
pub struct Icon {
    pub lines: [&'static str; 5],
    pub tint: u8,
}

static SUNNY: Icon = Icon {
    lines: [
        "    \\   /    ",
        "     .-.     ",
        "  - (   ) -  ",
        "     `-'     ",
        "    /   \\    ",
    ],
    tint: 226,
};

static PARTLY_CLOUDY: Icon = Icon {
    lines: [
        "   \\  /      ",
        " _ /\"\".-.    ",
        "   \\_(   ).  ",
        "   /(___(__) ",
        "             ",
    ],
    tint: 228,
};

static CLOUDY: Icon = Icon {
    lines: [
        "             ",
        "     .--.    ",
        "  .-(    ).  ",
        " (___.__)__) ",
        "             ",
    ],
    tint: 250,
};

static OVERCAST: Icon = Icon {
    lines: [
        "             ",
        "     .--.    ",
        "  .-(    ).  ",
        " (___.__)__) ",
        "  (__(___)   ",
    ],
    tint: 240,
};

static FOG: Icon = Icon {
    lines: [
        "             ",
        " _ - _ - _ - ",
        "  _ - _ - _  ",
        " _ - _ - _ - ",
        "             ",
    ],
    tint: 251,
};

static LIGHT_RAIN: Icon = Icon {
    lines: [
        "     .-.     ",
        "    (   ).   ",
        "   (___(__)  ",
        "    ' ' ' '  ",
        "   ' ' ' '   ",
    ],
    tint: 111,
};

static HEAVY_RAIN: Icon = Icon {
    lines: [
        "     .-.     ",
        "    (   ).   ",
        "   (___(__)  ",
        "  ,',',',',  ",
        "  ',',',','  ",
    ],
    tint: 21,
};

static SHOWERS: Icon = Icon {
    lines: [
        " _`/\"\".-.    ",
        "  ,\\_(   ).  ",
        "   /(___(__) ",
        "     ' ' ' ' ",
        "    ' ' ' '  ",
    ],
    tint: 111,
};

static THUNDER: Icon = Icon {
    lines: [
        "     .-.     ",
        "    (   ).   ",
        "   (___(__)  ",
        "    ' /_' '  ",
        "     /  '    ",
    ],
    tint: 228,
};

static LIGHT_SNOW: Icon = Icon {
    lines: [
        "     .-.     ",
        "    (   ).   ",
        "   (___(__)  ",
        "    *  *  *  ",
        "   *  *  *   ",
    ],
    tint: 255,
};

static HEAVY_SNOW: Icon = Icon {
    lines: [
        "     .-.     ",
        "    (   ).   ",
        "   (___(__)  ",
        "   * * * *   ",
        "  * * * *    ",
    ],
    tint: 255,
};

static SLEET: Icon = Icon {
    lines: [
        "     .-.     ",
        "    (   ).   ",
        "   (___(__)  ",
        "    ' * ' *  ",
        "   * ' * '   ",
    ],
    tint: 117,
};

/// OpenWeatherMap condition codes.
static CONDITION_ART: [(i64, &Icon); 55] = [
    (200, &THUNDER),
    (201, &THUNDER),
    (202, &THUNDER),
    (210, &THUNDER),
    (211, &THUNDER),
    (212, &THUNDER),
    (221, &THUNDER),
    (230, &THUNDER),
    (231, &THUNDER),
    (232, &THUNDER),
    (300, &LIGHT_RAIN),
    (301, &LIGHT_RAIN),
    (302, &LIGHT_RAIN),
    (310, &LIGHT_RAIN),
    (311, &LIGHT_RAIN),
    (312, &LIGHT_RAIN),
    (313, &SHOWERS),
    (314, &SHOWERS),
    (321, &SHOWERS),
    (500, &LIGHT_RAIN),
    (501, &LIGHT_RAIN),
    (502, &HEAVY_RAIN),
    (503, &HEAVY_RAIN),
    (504, &HEAVY_RAIN),
    (511, &SLEET),
    (520, &SHOWERS),
    (521, &SHOWERS),
    (522, &HEAVY_RAIN),
    (531, &SHOWERS),
    (600, &LIGHT_SNOW),
    (601, &LIGHT_SNOW),
    (602, &HEAVY_SNOW),
    (611, &SLEET),
    (612, &SLEET),
    (613, &SLEET),
    (615, &SLEET),
    (616, &SLEET),
    (620, &LIGHT_SNOW),
    (621, &HEAVY_SNOW),
    (622, &HEAVY_SNOW),
    (701, &FOG),
    (711, &FOG),
    (721, &FOG),
    (731, &FOG),
    (741, &FOG),
    (751, &FOG),
    (761, &FOG),
    (762, &FOG),
    (771, &FOG),
    (781, &FOG),
    (800, &SUNNY),
    (801, &PARTLY_CLOUDY),
    (802, &CLOUDY),
    (803, &CLOUDY),
    (804, &OVERCAST),
];

pub fn lookup_art(condition_id: i64) -> Result<&'static Icon, Error> {
    CONDITION_ART
        .iter()
        .find(|(code, _)| *code == condition_id)
        .map(|(_, icon)| *icon)
        .ok_or_else(|| Error::field(Stage::Art, format!("unknown condition code {condition_id}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_known_codes() {
        assert_eq!(lookup_art(800).unwrap(), &SUNNY);
        assert_eq!(lookup_art(804).unwrap(), &OVERCAST);
        assert_eq!(lookup_art(211).unwrap(), &THUNDER);
        assert_eq!(lookup_art(741).unwrap(), &FOG);
    }

    #[test]
    fn unknown_code_is_an_art_error() {
        let err = lookup_art(9999).unwrap_err();
        assert_eq!(err.stage(), Some(Stage::Art));
        assert_eq!(err.to_string(), "error in art part: unknown condition code 9999");
    }

    #[test]
    fn codes_are_unique() {
        for (i, (code, _)) in CONDITION_ART.iter().enumerate() {
            assert!(CONDITION_ART[i + 1..].iter().all(|(other, _)| other != code));
        }
    }

    #[test]
    fn every_line_has_the_same_width() {
        for (code, icon) in CONDITION_ART.iter() {
            for line in icon.lines {
                assert_eq!(line.chars().count(), 13, "code {code}: {line:?}");
            }
        }
    }
}
