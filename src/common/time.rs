// src/common/time.rs

use chrono::{DateTime, Datelike, Duration, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Janela de tempo usada pelos endpoints de estatísticas do vendedor.
// "Hoje" começa na meia-noite LOCAL, não UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TimeFilter {
    Today,
    Week,
    Month,
    AllTime,
}

impl TimeFilter {
    // Valor desconhecido cai em "all-time"; a janela padrão de cada
    // endpoint é decidida no handler.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("today") => TimeFilter::Today,
            Some("week") => TimeFilter::Week,
            Some("month") => TimeFilter::Month,
            _ => TimeFilter::AllTime,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeFilter::Today => "today",
            TimeFilter::Week => "week",
            TimeFilter::Month => "month",
            TimeFilter::AllTime => "all-time",
        }
    }

    // Retorna (início, fim) da janela em UTC.
    pub fn range(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let now_local = Local::now();
        let end = Utc::now();

        let start = match self {
            TimeFilter::Today => local_midnight(now_local),
            TimeFilter::Week => end - Duration::days(7),
            TimeFilter::Month => {
                let first = now_local
                    .date_naive()
                    .with_day(1)
                    .expect("dia 1 sempre existe")
                    .and_hms_opt(0, 0, 0)
                    .expect("meia-noite sempre existe");
                Local
                    .from_local_datetime(&first)
                    .earliest()
                    .map(|dt| dt.with_timezone(&Utc))
                    .unwrap_or(end - Duration::days(31))
            }
            TimeFilter::AllTime => DateTime::<Utc>::UNIX_EPOCH,
        };

        (start, end)
    }
}

// Meia-noite local de hoje, convertida para UTC.
pub fn local_midnight(now: DateTime<Local>) -> DateTime<Utc> {
    let midnight = now
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .expect("meia-noite sempre existe");
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| now.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_filters() {
        assert_eq!(TimeFilter::parse(Some("today")), TimeFilter::Today);
        assert_eq!(TimeFilter::parse(Some("week")), TimeFilter::Week);
        assert_eq!(TimeFilter::parse(Some("month")), TimeFilter::Month);
    }

    #[test]
    fn parse_unknown_falls_back_to_all_time() {
        assert_eq!(TimeFilter::parse(None), TimeFilter::AllTime);
        assert_eq!(TimeFilter::parse(Some("yesterday")), TimeFilter::AllTime);
        assert_eq!(TimeFilter::parse(Some("")), TimeFilter::AllTime);
    }

    #[test]
    fn today_starts_at_local_midnight() {
        let (start, end) = TimeFilter::Today.range();
        assert!(start <= end);
        let start_local = start.with_timezone(&Local);
        assert_eq!(start_local.time(), chrono::NaiveTime::MIN);
        assert_eq!(start_local.date_naive(), Local::now().date_naive());
    }

    #[test]
    fn week_spans_seven_days() {
        let (start, end) = TimeFilter::Week.range();
        let delta = end - start;
        assert_eq!(delta.num_days(), 7);
    }

    #[test]
    fn month_starts_on_day_one() {
        let (start, end) = TimeFilter::Month.range();
        assert!(start <= end);
        assert_eq!(start.with_timezone(&Local).day(), 1);
    }

    #[test]
    fn all_time_starts_at_epoch() {
        let (start, _) = TimeFilter::AllTime.range();
        assert_eq!(start, DateTime::<Utc>::UNIX_EPOCH);
    }
}
