//! Writes `sample_survey.csv`, a deterministic survey file that exercises
//! every part of the dashboard: messy age text, a high-cardinality email
//! column, a handful of categorical answers and a few numeric measures with
//! the odd blank.

use anyhow::Context;

/// SplitMix64 stream: deterministic answers for a fixed seed.
struct SurveyRng(u64);

impl SurveyRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Normal sample via Box-Muller.
    fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let radius = (-2.0 * self.unit().max(f64::MIN_POSITIVE).ln()).sqrt();
        let angle = std::f64::consts::TAU * self.unit();
        mean + std_dev * radius * angle.cos()
    }

    fn pick<'a>(&mut self, options: &[&'a str]) -> &'a str {
        options[(self.next_u64() % options.len() as u64) as usize]
    }

    fn chance(&mut self, p: f64) -> bool {
        self.unit() < p
    }
}

const RESPONDENTS: usize = 240;
const OUTPUT: &str = "sample_survey.csv";

const GENDERS: [&str; 2] = ["Female", "Male"];
const REGIONS: [&str; 5] = ["Jakarta", "Bandung", "Surabaya", "Medan", "Makassar"];
const EDUCATION: [&str; 4] = ["High School", "Diploma", "Bachelor", "Master"];
const SATISFACTION: [&str; 5] = ["Very Low", "Low", "Neutral", "High", "Very High"];

/// Ages written the way people type them into a free-text field.
fn messy_age(rng: &mut SurveyRng, age: u32) -> String {
    match rng.next_u64() % 5 {
        0 => age.to_string(),
        1 => format!("{age} years"),
        2 => format!("{age} thn"),
        3 => format!("~{age}"),
        _ => format!("umur {age}"),
    }
}

fn main() -> anyhow::Result<()> {
    let mut rng = SurveyRng(42);
    let mut writer = csv::Writer::from_path(OUTPUT).with_context(|| format!("creating {OUTPUT}"))?;

    writer.write_record([
        "Respondent ID",
        "Email",
        "Age",
        "Gender",
        "Region",
        "Education",
        "Satisfaction",
        "Monthly Income",
        "Hours Online",
    ])?;

    for id in 1..=RESPONDENTS {
        let age = rng.normal(31.0, 8.0).clamp(17.0, 65.0).round() as u32;
        let education = rng.pick(&EDUCATION);
        let income_base = match education {
            "High School" => 4.5,
            "Diploma" => 6.0,
            "Bachelor" => 8.5,
            _ => 12.0,
        };
        let income = (income_base + rng.normal(0.0, 1.5) + age as f64 * 0.05).max(1.0);
        let hours = (9.0 - age as f64 * 0.08 + rng.normal(0.0, 1.2)).max(0.5);

        let age_cell = if rng.chance(0.03) {
            String::new()
        } else {
            messy_age(&mut rng, age)
        };
        let income_cell = if rng.chance(0.05) {
            String::new()
        } else {
            format!("{:.1}", income * 1000.0)
        };

        writer.write_record([
            id.to_string(),
            format!("respondent{id:03}@mail.test"),
            age_cell,
            rng.pick(&GENDERS).to_string(),
            rng.pick(&REGIONS).to_string(),
            education.to_string(),
            rng.pick(&SATISFACTION).to_string(),
            income_cell,
            format!("{hours:.1}"),
        ])?;
    }
    writer.flush()?;

    println!("Wrote {RESPONDENTS} survey responses to {OUTPUT}");
    Ok(())
}
