use clap::ValueEnum;

/// Measurement system requested from the API.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
    Standard,
}

impl Units {
    pub fn as_query(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Standard => "standard",
        }
    }

    pub fn temperature_symbol(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
            Units::Standard => "K",
        }
    }

    pub fn to_celsius(&self, temp: f64) -> f64 {
        match self {
            Units::Metric => temp,
            Units::Imperial => temperature::f2c(temp),
            Units::Standard => temperature::k2c(temp),
        }
    }

    /// Imperial wind speeds arrive in miles per hour, the others in m/s.
    pub fn to_mps(&self, speed: f64) -> f64 {
        match self {
            Units::Imperial => speed::mph2mps(speed),
            Units::Metric | Units::Standard => speed,
        }
    }
}

pub mod temperature {
    const ZERO_C_IN_K: f64 = 273.15;

    pub fn f2c(temp_f: f64) -> f64 {
        (temp_f - 32.0) * 5.0 / 9.0
    }

    pub fn k2c(temp_k: f64) -> f64 {
        temp_k - ZERO_C_IN_K
    }

    #[test]
    fn test_temperature() {
        assert_eq!(f2c(212.0), 100.0);
        assert_eq!(f2c(32.0), 0.0);
        assert_eq!(k2c(273.15), 0.0);
        assert!((k2c(373.15) - 100.0).abs() < 1e-9);
    }
}

pub mod speed {
    const MPS_PER_MPH: f64 = 0.44704;

    pub fn mph2mps(mph: f64) -> f64 {
        mph * MPS_PER_MPH
    }

    #[test]
    fn test_speed() {
        assert_eq!(mph2mps(0.0), 0.0);
        assert!((mph2mps(10.0) - 4.4704).abs() < 1e-9);
    }
}

pub mod direction {
    // Sector start, in whole degrees, for each 45° slice. The first slice
    // wraps through north.
    const SECTORS: [(i64, &str, &str); 8] = [
        (337, "↓", "N"),
        (22, "↙", "NE"),
        (67, "←", "E"),
        (112, "↖", "SE"),
        (157, "↑", "S"),
        (202, "↗", "SW"),
        (247, "→", "W"),
        (292, "↘", "NW"),
    ];

    fn sector(deg: i64) -> Option<usize> {
        if !(0..360).contains(&deg) {
            return None;
        }
        if deg >= SECTORS[0].0 || deg < SECTORS[1].0 {
            return Some(0);
        }
        SECTORS
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .find(|(_, (start, _, _))| deg >= *start)
            .map(|(idx, _)| idx)
    }

    /// Arrow glyph for a wind direction. Anything outside 0..360 is `?`.
    pub fn wind_arrow(deg: i64) -> &'static str {
        sector(deg).map_or("?", |idx| SECTORS[idx].1)
    }

    pub fn compass(deg: i64) -> &'static str {
        sector(deg).map_or("?", |idx| SECTORS[idx].2)
    }

    #[test]
    fn test_wind_arrow() {
        assert_eq!(wind_arrow(0), "↓");
        assert_eq!(wind_arrow(21), "↓");
        assert_eq!(wind_arrow(22), "↙");
        assert_eq!(wind_arrow(66), "↙");
        assert_eq!(wind_arrow(67), "←");
        assert_eq!(wind_arrow(80), "←");
        assert_eq!(wind_arrow(112), "↖");
        assert_eq!(wind_arrow(157), "↑");
        assert_eq!(wind_arrow(201), "↑");
        assert_eq!(wind_arrow(202), "↗");
        assert_eq!(wind_arrow(247), "→");
        assert_eq!(wind_arrow(292), "↘");
        assert_eq!(wind_arrow(336), "↘");
        assert_eq!(wind_arrow(337), "↓");
        assert_eq!(wind_arrow(359), "↓");
    }

    #[test]
    fn test_wind_arrow_out_of_range() {
        assert_eq!(wind_arrow(360), "?");
        assert_eq!(wind_arrow(400), "?");
        assert_eq!(wind_arrow(-5), "?");
    }

    #[test]
    fn test_compass() {
        assert_eq!(compass(0), "N");
        assert_eq!(compass(90), "E");
        assert_eq!(compass(180), "S");
        assert_eq!(compass(270), "W");
        assert_eq!(compass(340), "N");
        assert_eq!(compass(-1), "?");
    }
}
