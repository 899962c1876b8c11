// src/cli/interactive.rs
use std::collections::BTreeMap;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use tracing::debug;

use crate::error::WordforgeResult;
use crate::generator::GenerationOptions;
use crate::profile::{split_list, PersonalInfo, ReconInfo, TargetDocument, TargetProfile, SOCIAL_PLATFORMS};
use crate::utils::validate_date_format;

/// Interactive questionnaire collecting target facts and options
pub struct DataCollector {
    quiet: bool,
    defaults: GenerationOptions,
    theme: ColorfulTheme,
}

impl DataCollector {
    /// `defaults` seeds the answers offered for every generation option
    pub fn new(quiet: bool, defaults: GenerationOptions) -> Self {
        Self {
            quiet,
            defaults,
            theme: ColorfulTheme::default(),
        }
    }

    /// Walk through every section of the questionnaire
    pub fn collect_all_data(&self) -> WordforgeResult<TargetDocument> {
        if !self.quiet {
            println!("{}", style("Target Intelligence Gathering").bold().cyan());
            println!("Please provide information about your target (press Enter to skip optional fields)\n");
        }

        let document = TargetDocument {
            profile: TargetProfile {
                personal_info: self.collect_personal_info()?,
                social_media: self.collect_social_media()?,
                recon_info: self.collect_recon_info()?,
            },
            options: self.collect_options()?,
        };

        if !self.quiet {
            println!("\n{}", style("Data collection complete!").green());
        }
        debug!("Collected target profile for {}", document.profile.display_name());

        Ok(document)
    }

    fn heading(&self, title: &str) {
        if !self.quiet {
            println!("\n{}", style(title).bold().yellow());
        }
    }

    fn collect_personal_info(&self) -> WordforgeResult<PersonalInfo> {
        self.heading("Personal Information");

        let mut info = PersonalInfo {
            first_name: Some(self.prompt_required("First name")?),
            last_name: self.prompt("Last name")?,
            nickname: self.prompt("Nickname/Username")?,
            birth_date: self.prompt_date("Birth date (DDMMYYYY)")?,
            ..PersonalInfo::default()
        };

        if self.confirm("Does the target have a partner/spouse?", false)? {
            info.partner_name = self.prompt("Partner's name")?;
            info.partner_nickname = self.prompt("Partner's nickname")?;
            info.partner_birth_date = self.prompt_date("Partner's birth date (DDMMYYYY)")?;
        }

        if self.confirm("Does the target have children?", false)? {
            info.child_name = self.prompt("Child's name")?;
            info.child_nickname = self.prompt("Child's nickname")?;
            info.child_birth_date = self.prompt_date("Child's birth date (DDMMYYYY)")?;
        }

        info.pet_name = self.prompt("Pet name")?;
        info.company_name = self.prompt("Company name")?;
        info.keywords = self.prompt_list("Additional keywords (comma-separated)")?;

        Ok(info)
    }

    fn collect_social_media(&self) -> WordforgeResult<BTreeMap<String, Option<String>>> {
        self.heading("Social Media Intelligence");

        let mut social_media = BTreeMap::new();
        for (platform, description) in SOCIAL_PLATFORMS {
            social_media.insert(platform.to_string(), self.prompt(description)?);
        }

        Ok(social_media)
    }

    fn collect_recon_info(&self) -> WordforgeResult<ReconInfo> {
        self.heading("Advanced Reconnaissance");

        Ok(ReconInfo {
            email: self.prompt("Email address")?,
            phone_number: self.prompt("Phone number")?,
            address: self.prompt("Address/Location")?,
            university: self.prompt("University/School")?,
            hobbies: self.prompt_list("Hobbies/Interests (comma-separated)")?,
            favorite_teams: self.prompt_list("Favorite sports teams (comma-separated)")?,
            favorite_movies: self.prompt_list("Favorite movies (comma-separated)")?,
            favorite_books: self.prompt_list("Favorite books (comma-separated)")?,
            favorite_games: self.prompt_list("Favorite games (comma-separated)")?,
        })
    }

    fn collect_options(&self) -> WordforgeResult<GenerationOptions> {
        self.heading("Generation Options");

        let d = &self.defaults;
        let mut options = GenerationOptions {
            include_special_chars: self.confirm("Include special characters (!@#$%)", d.include_special_chars)?,
            include_numbers: self.confirm("Include numbers", d.include_numbers)?,
            include_leet_speak: self.confirm("Include leet speak (4 for a, 3 for e)", d.include_leet_speak)?,
            include_dates: self.confirm("Include date combinations", d.include_dates)?,
            include_reversed: self.confirm("Include reversed words", d.include_reversed)?,
            include_combinations: self.confirm("Include word combinations", d.include_combinations)?,
            ..d.clone()
        };

        if self.confirm("Configure advanced options?", false)? {
            options.include_common_passwords = self.confirm("Include common passwords", d.include_common_passwords)?;
            options.include_keyboard_patterns = self.confirm("Include keyboard patterns", d.include_keyboard_patterns)?;
            options.include_brand_names = self.confirm("Include brand names", d.include_brand_names)?;
            options.include_seasons = self.confirm("Include seasons", d.include_seasons)?;
            options.include_colors = self.confirm("Include colors", d.include_colors)?;
            options.include_phrases = self.confirm("Include phrases", d.include_phrases)?;
        }

        Ok(options)
    }

    fn confirm(&self, text: &str, default: bool) -> WordforgeResult<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(text)
            .default(default)
            .interact()?)
    }

    fn read_line(&self, text: &str) -> WordforgeResult<String> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(format!("   {}", text))
            .allow_empty(true)
            .interact_text()?;
        Ok(value.trim().to_string())
    }

    /// Optional answer; empty input becomes `None`
    fn prompt(&self, text: &str) -> WordforgeResult<Option<String>> {
        let value = self.read_line(text)?;
        Ok((!value.is_empty()).then_some(value))
    }

    fn prompt_required(&self, text: &str) -> WordforgeResult<String> {
        loop {
            let value = self.read_line(text)?;
            if !value.is_empty() {
                return Ok(value);
            }
            println!("   {}", style("This field is required!").red());
        }
    }

    fn prompt_list(&self, text: &str) -> WordforgeResult<Vec<String>> {
        Ok(split_list(&self.read_line(text)?))
    }

    /// Re-ask until the answer is empty or a real DDMMYYYY date
    fn prompt_date(&self, text: &str) -> WordforgeResult<Option<String>> {
        loop {
            let value = self.read_line(text)?;
            if value.is_empty() {
                return Ok(None);
            }
            if validate_date_format(&value) {
                return Ok(Some(value));
            }
            println!("   {}", style("Invalid date format! Use DDMMYYYY (e.g., 15061990)").red());
        }
    }
}
