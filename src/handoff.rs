//! Page-to-page handoff
//!
//! The only state that crosses the two pages is the athlete's name,
//! carried in the discovery page's URL query string.

const DISCOVERY_PAGE: &str = "discovery.html";

/// Relative link to the discovery form for the given athlete.
///
/// # Examples
///
/// ```
/// use trackside::handoff::discovery_link;
///
/// assert_eq!(
/// 	discovery_link("Jane Doe"),
/// 	"discovery.html?athlete=Jane%20Doe"
/// );
/// ```
pub fn discovery_link(athlete_name: &str) -> String {
	format!(
		"{}?athlete={}",
		DISCOVERY_PAGE,
		urlencoding::encode(athlete_name)
	)
}

/// Athlete name from a raw query string, if present.
///
/// Reads `athlete`, falling back to `athleteName`. A leading `?` is
/// tolerated, `+` and percent-escapes are decoded, and blank values
/// count as absent.
///
/// # Examples
///
/// ```
/// use trackside::handoff::athlete_from_query;
///
/// assert_eq!(
/// 	athlete_from_query("?athlete=Jane%20Doe"),
/// 	Some("Jane Doe".to_string())
/// );
/// assert_eq!(
/// 	athlete_from_query("athleteName=Jane+Doe"),
/// 	Some("Jane Doe".to_string())
/// );
/// assert_eq!(athlete_from_query("?other=1"), None);
/// ```
pub fn athlete_from_query(query: &str) -> Option<String> {
	param(query, "athlete").or_else(|| param(query, "athleteName"))
}

fn param(query: &str, key: &str) -> Option<String> {
	query
		.trim_start_matches('?')
		.split('&')
		.find_map(|pair| {
			let (k, v) = pair.split_once('=')?;
			if k != key {
				return None;
			}
			let spaced = v.replace('+', " ");
			let decoded = urlencoding::decode(&spaced)
				.map(|cow| cow.into_owned())
				.unwrap_or(spaced);
			Some(decoded)
		})
		.filter(|v| !v.trim().is_empty())
}
