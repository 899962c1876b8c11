// src/utils/format.rs
use console::style;

use crate::generator::GenerationOptions;

/// Format a number with comma thousands separators
pub fn format_number(num: usize) -> String {
    let digits = num.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Rough wall-clock estimate shown before a verbose run
pub fn estimate_generation_time(base_words: usize, options: &GenerationOptions) -> &'static str {
    let mut complexity_factor = 1.0_f64;

    if options.include_combinations {
        complexity_factor *= 2.0;
    }
    if options.include_leet_speak {
        complexity_factor *= 1.5;
    }
    if options.include_dates {
        complexity_factor *= 1.3;
    }

    let estimated = base_words as f64 * complexity_factor * 10.0;

    if estimated < 1_000.0 {
        "< 1 second"
    } else if estimated < 10_000.0 {
        "1-5 seconds"
    } else if estimated < 100_000.0 {
        "5-30 seconds"
    } else {
        "30+ seconds"
    }
}

/// Print the startup banner with the authorization warning
pub fn display_banner(version: &str) {
    let banner = format!(
        r#"
╔══════════════════════════════════════════════════════════════╗
║                      wordforge v{:<8}                      ║
║           Target-Profiled Password Wordlist Generator        ║
╚══════════════════════════════════════════════════════════════╝

WARNING: This tool is for authorized security testing only!
   Using this tool against systems without explicit permission
   is illegal and unethical. Always ensure proper authorization.
"#,
        version
    );
    println!("{}", style(banner).cyan().bold());
}
