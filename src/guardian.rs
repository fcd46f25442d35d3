//! Guardian section state machine
//!
//! The registration form shows a parent/guardian section only while the
//! subject's computed age is under [`GUARDIAN_AGE_THRESHOLD`]. The state
//! machine is pure data in, data out: it takes the raw date-of-birth
//! value and hands back a declarative [`SectionDirectives`] record; a
//! renderer applies it to the actual page.

use chrono::{Datelike, NaiveDate};
use trackside_forms::DateField;

/// Age below which a guardian section is required.
pub const GUARDIAN_AGE_THRESHOLD: i32 = 16;

/// Calendar age on `reference` for someone born on `date_of_birth`.
///
/// Whole years between the two dates, decremented by one when the
/// reference month/day precedes the birth month/day. The birthday itself
/// counts: turning 16 on the reference date yields 16.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use trackside::guardian::age_on;
///
/// let reference = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
///
/// let sixteen_today = NaiveDate::from_ymd_opt(2008, 6, 15).unwrap();
/// assert_eq!(age_on(reference, sixteen_today), 16);
///
/// let sixteen_tomorrow = NaiveDate::from_ymd_opt(2008, 6, 16).unwrap();
/// assert_eq!(age_on(reference, sixteen_tomorrow), 15);
/// ```
pub fn age_on(reference: NaiveDate, date_of_birth: NaiveDate) -> i32 {
	let mut age = reference.year() - date_of_birth.year();
	if (reference.month(), reference.day()) < (date_of_birth.month(), date_of_birth.day()) {
		age -= 1;
	}
	age
}

/// Visibility state of the guardian section and consent statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardianState {
	/// No date of birth entered yet.
	Unset,
	/// Computed age under the threshold.
	Minor,
	/// Computed age at or over the threshold.
	Adult,
}

/// Declarative visibility+requiredness record for one state.
///
/// The renderer applies this to the page; nothing here touches a
/// document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDirectives {
	pub guardian_visible: bool,
	pub guardian_required: bool,
	/// Stale error annotations on guardian fields must be removed.
	pub clear_guardian_errors: bool,
	pub guardian_statement_visible: bool,
	pub adult_statement_visible: bool,
}

impl GuardianState {
	pub fn from_age(age: i32) -> Self {
		if age < GUARDIAN_AGE_THRESHOLD {
			Self::Minor
		} else {
			Self::Adult
		}
	}

	/// State for the current raw date-of-birth value, starting fresh.
	///
	/// Used at submit time so the payload follows what is in the field
	/// now, not a state cached from an earlier check.
	pub fn from_birth_date_value(raw: &str, today: NaiveDate) -> Self {
		Self::Unset.on_birth_date_input(raw, today)
	}

	/// Transition on a date-of-birth change.
	///
	/// Unparseable input (including an emptied field) is not a
	/// transition; the current state is kept.
	///
	/// # Examples
	///
	/// ```
	/// use chrono::NaiveDate;
	/// use trackside::guardian::GuardianState;
	///
	/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
	///
	/// let state = GuardianState::Unset.on_birth_date_input("2010-01-01", today);
	/// assert_eq!(state, GuardianState::Minor);
	///
	/// // Garbage input leaves the state where it was.
	/// assert_eq!(state.on_birth_date_input("not a date", today), GuardianState::Minor);
	/// ```
	pub fn on_birth_date_input(self, raw: &str, today: NaiveDate) -> Self {
		match parse_birth_date(raw) {
			Some(dob) => Self::from_age(age_on(today, dob)),
			None => self,
		}
	}

	/// The visibility+requiredness record for this state.
	pub fn directives(self) -> SectionDirectives {
		match self {
			// Before the age is known the guardian statement is shown;
			// the section itself stays hidden and optional.
			Self::Unset => SectionDirectives {
				guardian_visible: false,
				guardian_required: false,
				clear_guardian_errors: false,
				guardian_statement_visible: true,
				adult_statement_visible: false,
			},
			Self::Minor => SectionDirectives {
				guardian_visible: true,
				guardian_required: true,
				clear_guardian_errors: false,
				guardian_statement_visible: true,
				adult_statement_visible: false,
			},
			Self::Adult => SectionDirectives {
				guardian_visible: false,
				guardian_required: false,
				clear_guardian_errors: true,
				guardian_statement_visible: false,
				adult_statement_visible: true,
			},
		}
	}
}

fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
	DateField::new("date_of_birth".to_string())
		.parse_date(raw.trim())
		.ok()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn reference() -> NaiveDate {
		NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
	}

	#[rstest]
	#[case(2008, 6, 15, 16)] // birthday today: already 16
	#[case(2008, 6, 16, 15)] // birthday tomorrow: still 15
	#[case(2008, 6, 14, 16)]
	#[case(2010, 1, 1, 14)]
	#[case(1990, 12, 31, 33)]
	#[case(2024, 6, 15, 0)]
	fn test_age_on_calendar_rule(
		#[case] y: i32,
		#[case] m: u32,
		#[case] d: u32,
		#[case] expected: i32,
	) {
		// Arrange
		let dob = NaiveDate::from_ymd_opt(y, m, d).unwrap();

		// Act
		let age = age_on(reference(), dob);

		// Assert
		assert_eq!(age, expected);
	}

	#[test]
	fn test_threshold_boundary_is_adult() {
		assert_eq!(GuardianState::from_age(16), GuardianState::Adult);
		assert_eq!(GuardianState::from_age(15), GuardianState::Minor);
	}

	#[test]
	fn test_transition_minor_to_adult() {
		let today = reference();

		let state = GuardianState::Unset.on_birth_date_input("2010-01-01", today);
		assert_eq!(state, GuardianState::Minor);

		let state = state.on_birth_date_input("2000-01-01", today);
		assert_eq!(state, GuardianState::Adult);
	}

	#[rstest]
	#[case("")]
	#[case("   ")]
	#[case("not a date")]
	#[case("2024-13-40")]
	fn test_invalid_input_is_not_a_transition(#[case] raw: &str) {
		let today = reference();

		assert_eq!(
			GuardianState::Unset.on_birth_date_input(raw, today),
			GuardianState::Unset
		);
		assert_eq!(
			GuardianState::Minor.on_birth_date_input(raw, today),
			GuardianState::Minor
		);
		assert_eq!(
			GuardianState::Adult.on_birth_date_input(raw, today),
			GuardianState::Adult
		);
	}

	#[test]
	fn test_uk_format_accepted() {
		let state = GuardianState::Unset.on_birth_date_input("15/06/2008", reference());
		assert_eq!(state, GuardianState::Adult);
	}

	#[test]
	fn test_unset_directives_default_to_guardian_statement() {
		let d = GuardianState::Unset.directives();

		assert!(!d.guardian_visible);
		assert!(!d.guardian_required);
		assert!(!d.clear_guardian_errors);
		assert!(d.guardian_statement_visible);
		assert!(!d.adult_statement_visible);
	}

	#[test]
	fn test_minor_directives() {
		let d = GuardianState::Minor.directives();

		assert!(d.guardian_visible);
		assert!(d.guardian_required);
		assert!(!d.clear_guardian_errors);
		assert!(d.guardian_statement_visible);
		assert!(!d.adult_statement_visible);
	}

	#[test]
	fn test_adult_directives_clear_stale_errors() {
		let d = GuardianState::Adult.directives();

		assert!(!d.guardian_visible);
		assert!(!d.guardian_required);
		assert!(d.clear_guardian_errors);
		assert!(!d.guardian_statement_visible);
		assert!(d.adult_statement_visible);
	}

	#[test]
	fn test_from_birth_date_value_ignores_history() {
		// Submit-time evaluation starts from scratch: garbage input with
		// no parseable date means Unset, whatever happened earlier.
		assert_eq!(
			GuardianState::from_birth_date_value("garbage", reference()),
			GuardianState::Unset
		);
		assert_eq!(
			GuardianState::from_birth_date_value("2010-01-01", reference()),
			GuardianState::Minor
		);
	}
}
