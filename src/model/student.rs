use super::deserialize_some;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: i64,
    #[schema(value_type = String, format = Date, example = "2005-01-01")]
    pub birth_date: NaiveDate,
    pub first_semester_grade: Option<f64>,
    pub second_semester_grade: Option<f64>,
    /// Mean of both semester grades; null unless both are set.
    pub final_average: Option<f64>,
    pub class_id: Option<i64>,
}

impl Student {
    /// Recompute `final_average` from the current grades.
    pub fn refresh_average(&mut self) {
        self.final_average = final_average(self.first_semester_grade, self.second_semester_grade);
    }
}

/// Arithmetic mean of the two grades, or `None` when either is missing.
pub fn final_average(first: Option<f64>, second: Option<f64>) -> Option<f64> {
    match (first, second) {
        (Some(a), Some(b)) => Some((a + b) / 2.0),
        _ => None,
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateStudent {
    #[schema(example = "João")]
    pub name: Option<String>,
    #[schema(example = 15)]
    pub age: Option<i64>,
    /// `YYYY-MM-DD`
    #[schema(example = "2005-01-01")]
    pub birth_date: Option<String>,
    #[schema(example = 7.5)]
    pub first_semester_grade: Option<f64>,
    #[schema(example = 8.0)]
    pub second_semester_grade: Option<f64>,
    pub class_id: Option<i64>,
}

/// Partial update. Grades and `class_id` accept `null` to clear the stored value.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateStudent {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub birth_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<f64>)]
    pub first_semester_grade: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<f64>)]
    pub second_semester_grade: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i64>)]
    pub class_id: Option<Option<i64>>,
}

impl UpdateStudent {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.birth_date.is_none()
            && self.first_semester_grade.is_none()
            && self.second_semester_grade.is_none()
            && self.class_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(Some(7.5), Some(8.0), Some(7.75))]
    #[case(Some(10.0), Some(0.0), Some(5.0))]
    #[case(None, Some(8.0), None)]
    #[case(Some(7.5), None, None)]
    #[case(None, None, None)]
    fn average_needs_both_grades(#[case] first: Option<f64>, #[case] second: Option<f64>, #[case] expected: Option<f64>) {
        assert_eq!(final_average(first, second), expected);
    }

    #[test]
    fn refresh_clears_stale_average() {
        let mut s = Student {
            id: 1,
            name: "Ana".into(),
            age: 15,
            birth_date: NaiveDate::from_ymd_opt(2009, 3, 2).unwrap(),
            first_semester_grade: None,
            second_semester_grade: Some(9.0),
            final_average: Some(8.5),
            class_id: None,
        };
        s.refresh_average();
        assert_eq!(s.final_average, None);
    }

    #[test]
    fn serializes_birth_date_as_plain_date() {
        let s = Student {
            id: 3,
            name: "Ana".into(),
            age: 15,
            birth_date: NaiveDate::from_ymd_opt(2009, 3, 2).unwrap(),
            first_semester_grade: Some(7.5),
            second_semester_grade: Some(8.0),
            final_average: Some(7.75),
            class_id: None,
        };
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["birth_date"], "2009-03-02");
        assert_eq!(v["class_id"], serde_json::Value::Null);
    }

    #[test]
    fn update_tracks_explicit_nulls() {
        let u: UpdateStudent =
            serde_json::from_value(json!({ "first_semester_grade": null, "second_semester_grade": 6.0 })).unwrap();
        assert_eq!(u.first_semester_grade, Some(None));
        assert_eq!(u.second_semester_grade, Some(Some(6.0)));
        assert_eq!(u.class_id, None);
        assert!(UpdateStudent::default().is_empty());
    }
}
