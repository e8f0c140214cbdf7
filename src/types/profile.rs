// src/types/profile.rs
//! Personal profile data used to ground the assistant's answers

use serde::{Deserialize, Serialize};

// Unknown fields in the source document are ignored; missing ones fall back to defaults.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub about: String,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub education: Education,
    pub experience: Vec<Experience>,
    pub contact: Contact,
    pub hobbies: Hobbies,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technology_used: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub university: String,
    pub cgpa: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hobbies {
    #[serde(rename = "Hobby1")]
    pub hobby1: Option<String>,
    #[serde(rename = "Hobby2")]
    pub hobby2: Option<String>,
    #[serde(rename = "Hobby3")]
    pub hobby3: Option<String>,
    #[serde(rename = "Hobby4")]
    pub hobby4: Option<String>,
    #[serde(rename = "Hobby5")]
    pub hobby5: Option<String>,
    #[serde(rename = "Hobby6")]
    pub hobby6: Option<String>,
}
