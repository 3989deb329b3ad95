//! Heurística de vencimiento de servicio
//!
//! Un vehículo está "vencido" si nunca fue atendido o si su último servicio
//! fue hace más de 365 días.

use chrono::NaiveDate;

/// Días desde el último servicio a partir de los cuales un vehículo
/// se considera vencido.
pub const SERVICE_DUE_DAYS: i64 = 365;

/// Decide si un vehículo está vencido de servicio.
///
/// La fecha del último servicio puede venir como texto formateado
/// (`YYYY-MM-DD`) o como valor nativo convertido a texto por la consulta;
/// ambos se parsean. Una fecha imparseable se trata conservadoramente
/// como vencida.
pub fn is_due_for_service(last_service: Option<&str>, today: NaiveDate) -> bool {
    let raw = match last_service {
        Some(value) => value,
        None => return true, // nunca atendido
    };

    match parse_service_date(raw) {
        Some(date) => (today - date).num_days() > SERVICE_DUE_DAYS,
        None => true,
    }
}

/// Parsea la fecha del último servicio tolerando formato fecha y
/// formato timestamp.
fn parse_service_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    // Algunos drivers serializan DATE como timestamp; quedarse con la parte fecha
    trimmed
        .split_whitespace()
        .next()
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_never_serviced_is_due() {
        assert!(is_due_for_service(None, today()));
    }

    #[test]
    fn test_serviced_400_days_ago_is_due() {
        let date = today() - Duration::days(400);
        assert!(is_due_for_service(
            Some(&date.format("%Y-%m-%d").to_string()),
            today()
        ));
    }

    #[test]
    fn test_serviced_10_days_ago_is_not_due() {
        let date = today() - Duration::days(10);
        assert!(!is_due_for_service(
            Some(&date.format("%Y-%m-%d").to_string()),
            today()
        ));
    }

    #[test]
    fn test_exactly_365_days_is_not_due() {
        let date = today() - Duration::days(365);
        assert!(!is_due_for_service(
            Some(&date.format("%Y-%m-%d").to_string()),
            today()
        ));
    }

    #[test]
    fn test_unparseable_date_is_due() {
        assert!(is_due_for_service(Some("not-a-date"), today()));
    }

    #[test]
    fn test_timestamp_format_parses() {
        assert!(!is_due_for_service(Some("2025-06-10 00:00:00"), today()));
    }
}
