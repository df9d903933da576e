use clap::{Args, Parser, Subcommand, ValueEnum};
use log::debug;
use yantra_rs::{
    ALL_INSTRUMENTS, ALL_SITES, AnimationRequest, CivilTime, DaylightConfig, DaylightResult,
    GenerateRequest, GeoCoordinate, GeometrySpec, HourProjection, HourTableConfig, Instant,
    InstrumentKind, ObservedReading, ReferenceSite, Shadow, SolarConfig, SolarTimeModel,
    YantraError, assess_observation, available_sites, checked_day_of_year, climate_zone, daylight,
    day_track, hour_table_with, instant_at_solar_hour, local_solar_time, site_suitability,
    solar_position_with, start_session,
};

#[derive(Parser)]
#[command(name = "yantra", about = "Masonry sundial geometry and solar position")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// A place on Earth.
#[derive(Args, Clone, Copy)]
struct Place {
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,
    /// Elevation in meters
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    elev: f64,
}

#[derive(Clone, Copy, ValueEnum)]
enum ProjectionArg {
    HorizontalDial,
    Equatorial,
    Azimuthal,
    LegacyLinear,
}

impl From<ProjectionArg> for HourProjection {
    fn from(p: ProjectionArg) -> Self {
        match p {
            ProjectionArg::HorizontalDial => Self::HorizontalDial,
            ProjectionArg::Equatorial => Self::Equatorial,
            ProjectionArg::Azimuthal => Self::Azimuthal,
            ProjectionArg::LegacyLinear => Self::LegacyLinear,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List supported instruments
    Instruments,
    /// List historical reference sites
    Sites {
        /// Only sites with reference data for this instrument
        #[arg(long)]
        instrument: Option<String>,
    },
    /// Generate the geometry of one instrument
    Generate {
        #[command(flatten)]
        place: Place,
        /// Instrument slug or name (e.g. samrat_yantra, Rama)
        #[arg(long)]
        instrument: String,
        /// Overall scale factor
        #[arg(long, default_value = "1")]
        scale: f64,
        /// Reference site to scale from (default: the instrument's own)
        #[arg(long)]
        reference: Option<String>,
    },
    /// Print the hour-line table of an instrument
    Hours {
        #[command(flatten)]
        place: Place,
        #[arg(long)]
        instrument: String,
        /// Override the instrument's projection
        #[arg(long, value_enum)]
        projection: Option<ProjectionArg>,
        /// All 24 hours instead of 6..18
        #[arg(long)]
        full_day: bool,
    },
    /// Sun position at an instant
    Solar {
        #[command(flatten)]
        place: Place,
        /// ISO-8601 date-time (YYYY-MM-DDThh:mm:ss[Z|±hh:mm])
        #[arg(long)]
        date: String,
        /// Use apparent solar time (equation of time applied)
        #[arg(long)]
        apparent: bool,
    },
    /// Sunrise, sunset and day length in solar hours
    Daylight {
        #[command(flatten)]
        place: Place,
        /// Calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Geometric horizon: no refraction, semidiameter or dip
        #[arg(long)]
        geometric: bool,
    },
    /// Climate zone and per-instrument suitability of a site
    Suitability {
        #[command(flatten)]
        place: Place,
    },
    /// Grade a field reading against the solar model
    Assess {
        #[command(flatten)]
        place: Place,
        /// ISO-8601 date-time of the reading
        #[arg(long)]
        date: String,
        /// Measured solar elevation, degrees
        #[arg(long, allow_hyphen_values = true)]
        elevation: Option<f64>,
        /// Measured compass bearing, degrees from north through east
        #[arg(long)]
        bearing: Option<f64>,
        /// Solar hour read off the dial
        #[arg(long)]
        hour: Option<f64>,
    },
    /// Play a shadow animation and print its frames
    Animate {
        #[command(flatten)]
        place: Place,
        #[arg(long)]
        instrument: String,
        /// Calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Solar hour to start at
        #[arg(long, default_value = "6")]
        start_hour: f64,
        /// UTC offset for displayed times, minutes
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        offset: i32,
        /// Simulated seconds per real second
        #[arg(long, default_value = "600")]
        rate: f64,
        /// Real seconds per frame
        #[arg(long, default_value = "1")]
        dt: f64,
        /// Number of frames
        #[arg(long, default_value = "12")]
        frames: usize,
    },
    /// Sample a whole-day solar track for an instrument
    Track {
        #[command(flatten)]
        place: Place,
        #[arg(long)]
        instrument: String,
        /// Calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Minutes between samples
        #[arg(long, default_value = "60")]
        step: f64,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Instruments => {
            for kind in ALL_INSTRUMENTS {
                println!(
                    "{:<24} {:<22} {:?}\n    {}",
                    kind.slug(),
                    kind.name(),
                    kind.family(),
                    kind.description()
                );
            }
        }

        Commands::Sites { instrument } => {
            let sites = match instrument {
                Some(name) => available_sites(require_instrument(&name)),
                None => ALL_SITES.to_vec(),
            };
            for site in sites {
                println!(
                    "{:<10} {:<40} {:>8.4} {:>8.4} {:>6.0} m",
                    site.name(),
                    site.landmark(),
                    site.latitude_deg(),
                    site.longitude_deg(),
                    site.elevation_m()
                );
            }
        }

        Commands::Generate {
            place,
            instrument,
            scale,
            reference,
        } => {
            let request = GenerateRequest {
                scale_factor: scale,
                reference,
                ..GenerateRequest::new(place.lat, place.lon, place.elev, &instrument)
            };
            let spec = or_exit(yantra_rs::generate(&request));
            print_spec(&spec);
        }

        Commands::Hours {
            place,
            instrument,
            projection,
            full_day,
        } => {
            let coordinate = require_coordinate(place);
            let kind = require_instrument(&instrument);
            let base = if full_day {
                HourTableConfig::full_day()
            } else {
                HourTableConfig::default()
            };
            let config = HourTableConfig {
                projection: projection.map(HourProjection::from),
                ..base
            };
            let table = or_exit(hour_table_with(&coordinate, kind, &config).map_err(YantraError::from));
            println!("{kind} at {coordinate} ({} projection)", table.projection());
            for (hour, angle) in table.iter() {
                println!("  {:02}:00  {:>9.4} deg", hour, angle);
            }
        }

        Commands::Solar {
            place,
            date,
            apparent,
        } => {
            let coordinate = require_coordinate(place);
            let instant = require_instant(&date);
            let config = SolarConfig {
                time_model: time_model(apparent),
            };
            let sun = solar_position_with(&coordinate, instant, &config);
            let lst = local_solar_time(&coordinate, instant, config.time_model);
            println!("Instant:      {instant}");
            println!("Solar hour:   {:.4}", lst.solar_hour);
            println!("Declination:  {:.4} deg", sun.declination_deg);
            println!("Hour angle:   {:.4} deg", sun.hour_angle_deg);
            println!("Elevation:    {:.4} deg", sun.elevation_deg);
            println!("Azimuth:      {:.4} deg (from south, west positive)", sun.azimuth_deg);
            println!("Bearing:      {:.4} deg (from north, east positive)", sun.compass_bearing_deg());
            if !sun.is_above_horizon() {
                println!("Sun is below the horizon");
            }
        }

        Commands::Daylight {
            place,
            date,
            geometric,
        } => {
            let coordinate = require_coordinate(place);
            let (year, month, day) = require_date(&date);
            let doy = or_exit(checked_day_of_year(year, month, day).map_err(YantraError::from));
            let config = if geometric {
                DaylightConfig::geometric()
            } else {
                DaylightConfig::default()
            };
            let result = or_exit(daylight(&coordinate, doy, &config).map_err(YantraError::from));
            match result {
                DaylightResult::Period {
                    sunrise_solar_hour,
                    sunset_solar_hour,
                    half_arc_deg,
                } => {
                    println!("Sunrise:    {} solar", format_hours(sunrise_solar_hour));
                    println!("Sunset:     {} solar", format_hours(sunset_solar_hour));
                    println!("Half arc:   {half_arc_deg:.4} deg");
                }
                DaylightResult::PolarNight => println!("Polar night: the sun does not rise"),
                DaylightResult::MidnightSun => println!("Midnight sun: the sun does not set"),
            }
            println!("Day length: {:.4} h", result.day_length_hours());
        }

        Commands::Suitability { place } => {
            let coordinate = require_coordinate(place);
            println!("{coordinate}: {} zone", climate_zone(&coordinate));
            for (kind, rating) in site_suitability(&coordinate) {
                println!("  {:<24} {rating}", kind.name());
            }
        }

        Commands::Assess {
            place,
            date,
            elevation,
            bearing,
            hour,
        } => {
            let coordinate = require_coordinate(place);
            let instant = require_instant(&date);
            let reading = ObservedReading {
                elevation_deg: elevation,
                compass_bearing_deg: bearing,
                solar_hour: hour,
            };
            let a = or_exit(
                assess_observation(&coordinate, instant, &reading).map_err(YantraError::from),
            );
            println!("Position error: {:.3} deg", a.position_error_deg);
            println!("Time error:     {:.2} min", a.time_error_minutes);
            println!("Confidence:     {:.3} ({})", a.confidence, a.grade.name());
            for note in &a.notes {
                println!("  - {note}");
            }
        }

        Commands::Animate {
            place,
            instrument,
            date,
            start_hour,
            offset,
            rate,
            dt,
            frames,
        } => {
            let spec = generate_spec(place, &instrument);
            let start = solar_start(&spec, &date, start_hour, offset);
            let mut session = or_exit(start_session(AnimationRequest {
                spec,
                compression_factor: rate,
                start,
            }));
            session.play();
            debug!("animating {frames} frames, dt {dt}s at {rate}x");
            if let Some(first) = session.snapshot() {
                print_frame(0, first.instant, first.solar.elevation_deg, &first.shadow);
            }
            for i in 1..=frames {
                if let Some(snap) = session.tick(dt) {
                    print_frame(i, snap.instant, snap.solar.elevation_deg, &snap.shadow);
                }
            }
        }

        Commands::Track {
            place,
            instrument,
            date,
            step,
        } => {
            let spec = generate_spec(place, &instrument);
            let start = solar_start(&spec, &date, 0.0, 0);
            let steps = if step > 0.0 { (24.0 * 60.0 / step) as usize } else { 0 };
            let track = or_exit(day_track(&spec, start, step, steps).map_err(YantraError::from));
            for (i, snap) in track.iter().enumerate() {
                print_frame(i, snap.instant, snap.solar.elevation_deg, &snap.shadow);
            }
        }
    }
}

fn or_exit<T>(result: Result<T, YantraError>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn require_coordinate(place: Place) -> GeoCoordinate {
    or_exit(GeoCoordinate::new(place.lat, place.lon, place.elev).map_err(YantraError::from))
}

fn require_instrument(name: &str) -> InstrumentKind {
    name.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        eprintln!(
            "Valid: {}",
            ALL_INSTRUMENTS
                .iter()
                .map(|k| k.slug())
                .collect::<Vec<_>>()
                .join(", ")
        );
        std::process::exit(1);
    })
}

fn require_instant(s: &str) -> Instant {
    or_exit(
        s.parse::<CivilTime>()
            .and_then(|civil| Instant::from_civil(&civil))
            .map_err(YantraError::from),
    )
}

fn require_date(s: &str) -> (i32, u32, u32) {
    let parts: Vec<&str> = s.trim().split('-').collect();
    let parsed = match parts.as_slice() {
        [y, m, d] => match (y.parse(), m.parse(), d.parse()) {
            (Ok(y), Ok(m), Ok(d)) => Some((y, m, d)),
            _ => None,
        },
        _ => None,
    };
    parsed.unwrap_or_else(|| {
        eprintln!("Invalid date: {s} (expected YYYY-MM-DD)");
        std::process::exit(1);
    })
}

fn time_model(apparent: bool) -> SolarTimeModel {
    if apparent {
        SolarTimeModel::Apparent
    } else {
        SolarTimeModel::Mean
    }
}

fn generate_spec(place: Place, instrument: &str) -> GeometrySpec {
    or_exit(yantra_rs::generate(&GenerateRequest::new(
        place.lat,
        place.lon,
        place.elev,
        instrument,
    )))
}

fn solar_start(spec: &GeometrySpec, date: &str, solar_hour: f64, offset: i32) -> Instant {
    let (year, month, day) = require_date(date);
    or_exit(
        instant_at_solar_hour(spec.coordinate(), year, month, day, solar_hour, offset)
            .map_err(YantraError::from),
    )
}

fn format_hours(h: f64) -> String {
    let total = (h * 60.0).round() as i64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

fn print_spec(spec: &GeometrySpec) {
    let reference: ReferenceSite = spec.reference_site();
    println!("{} at {}", spec.kind(), spec.coordinate());
    println!(
        "Reference {reference}, latitude scale {:.4}, scale {:.2}, {} projection",
        spec.latitude_scale(),
        spec.scale_factor(),
        spec.hour_projection()
    );
    println!("Shadow caster: {:.3} m", spec.shadow_caster_height());
    println!("\nDimensions (m):");
    for (key, value) in spec.dimensions() {
        println!("  {key:<32} {value:>10.3}");
    }
    println!("\nAngles (deg):");
    for (key, value) in spec.angles() {
        println!("  {key:<32} {value:>10.4}");
    }
    println!("\nAccuracy:");
    for (key, value) in spec.accuracy() {
        println!("  {key:<32} {value:>10.3}");
    }
    println!("\nNotes:");
    for note in spec.notes() {
        println!("  - {note}");
    }
}

fn print_frame(i: usize, instant: Instant, elevation_deg: f64, shadow: &Shadow) {
    match shadow {
        Shadow::Cast(v) => println!(
            "{i:>4}  {instant}  el {elevation_deg:>7.2}  shadow {:>8.3} m at {:>8.3} deg{}",
            v.length_m,
            v.direction_deg,
            if v.clamped { " (clamped)" } else { "" }
        ),
        Shadow::NoShadow => println!("{i:>4}  {instant}  el {elevation_deg:>7.2}  no shadow"),
    }
}
