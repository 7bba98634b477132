//! Employee records.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::attributes::Attributes;
use crate::error::Result;
use crate::ids::EmployeeId;
use crate::kind::EntityKind;
use crate::record::Record;

/// A member of staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Primary identifier.
    pub emp_id: EmployeeId,

    pub name: String,

    pub department: String,

    pub job_title: String,

    /// Salary before allowances.
    pub basic_salary: f64,

    pub age: u32,

    /// Free-form date text, not validated.
    pub date_of_birth: String,

    pub passport_details: String,
}

/// Partial update for an [`Employee`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub department: Option<String>,
    pub job_title: Option<String>,
    pub basic_salary: Option<f64>,
    pub age: Option<u32>,
    pub date_of_birth: Option<String>,
    pub passport_details: Option<String>,
}

impl Record for Employee {
    type Id = EmployeeId;
    type Patch = EmployeePatch;

    const KIND: EntityKind = EntityKind::Employee;

    fn id(&self) -> &EmployeeId {
        &self.emp_id
    }

    fn apply(&mut self, patch: EmployeePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        if let Some(job_title) = patch.job_title {
            self.job_title = job_title;
        }
        if let Some(basic_salary) = patch.basic_salary {
            self.basic_salary = basic_salary;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(date_of_birth) = patch.date_of_birth {
            self.date_of_birth = date_of_birth;
        }
        if let Some(passport_details) = patch.passport_details {
            self.passport_details = passport_details;
        }
    }

    fn from_attributes(attrs: &Attributes) -> Result<Self> {
        Ok(Self {
            emp_id: attrs.required_text("emp_id")?.into(),
            name: attrs.required_text("name")?,
            department: attrs.required_text("department")?,
            job_title: attrs.required_text("job_title")?,
            basic_salary: attrs.required_amount("basic_salary")?,
            age: attrs.required_number("age")?,
            date_of_birth: attrs.required_text("date_of_birth")?,
            passport_details: attrs.required_text("passport_details")?,
        })
    }

    fn patch_from_attributes(attrs: &Attributes) -> Result<EmployeePatch> {
        attrs.reject_identifier()?;
        Ok(EmployeePatch {
            name: attrs.optional_text("name"),
            department: attrs.optional_text("department"),
            job_title: attrs.optional_text("job_title"),
            basic_salary: attrs.optional_amount("basic_salary")?,
            age: attrs.optional_number("age")?,
            date_of_birth: attrs.optional_text("date_of_birth"),
            passport_details: attrs.optional_text("passport_details"),
        })
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee ID: {}, Name: {}, Department: {}, Job Title: {}, Salary: {}, Age: {}, DOB: {}, Passport: {}",
            self.emp_id,
            self.name,
            self.department,
            self.job_title,
            self.basic_salary,
            self.age,
            self.date_of_birth,
            self.passport_details
        )
    }
}
