//! CLI `doctor` command — print the effective config and check the OCR engine.

use anyhow::Result;
use std::path::Path;

use mmemory::config::MmemoryConfig;
use mmemory::ocr::tesseract::TesseractRecognizer;

/// `config_path` is the file the config was loaded from (or would have been).
pub fn doctor(config: &MmemoryConfig, config_path: &Path) -> Result<()> {
    println!("mmemory Health Report");
    println!("=====================");
    println!();
    println!("Config file:       {}", config_file_status(config_path));
    println!("Log level:         {}", config.server.log_level);
    println!("HTTP address:      {}:{}", config.server.host, config.server.port);
    println!();
    println!("Members:");
    println!("  member1_name:    {}", display_name(&config.members.member1_name));
    println!("  member2_name:    {}", display_name(&config.members.member2_name));
    println!("  nickname slack:  {}", config.parser.nickname_slack);
    if config.members.member1_name.is_empty() && config.members.member2_name.is_empty() {
        println!("  WARNING: no member names set; nickname lines will be kept as content.");
    }
    println!();
    println!("OCR engine:");
    println!("  Engine:          {}", config.ocr.engine);
    println!("  Language:        {}", config.ocr.language);

    if config.ocr.engine == "tesseract" {
        let binary = config.resolved_ocr_binary();
        println!("  Binary:          {}", binary.display());
        match TesseractRecognizer::new(binary).version() {
            Ok(version) => println!("  Status:          OK ({version})"),
            Err(e) => {
                println!("  Status:          UNAVAILABLE ({e})");
                println!();
                println!("Install Tesseract with Korean data, e.g.:");
                println!("  apt install tesseract-ocr tesseract-ocr-kor");
            }
        }
    } else {
        println!("  Status:          UNSUPPORTED (supported engines: tesseract)");
    }

    Ok(())
}

fn config_file_status(path: &Path) -> String {
    if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", path.display())
    }
}

fn display_name(name: &str) -> &str {
    if name.is_empty() {
        "(not set)"
    } else {
        name
    }
}
