//! The `quizreport init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("quizreport.toml").exists() {
        println!("quizreport.toml already exists, skipping.");
    } else {
        std::fs::write("quizreport.toml", SAMPLE_CONFIG)?;
        println!("Created quizreport.toml");
    }

    std::fs::create_dir_all("quiz-logs")?;
    let example_path = std::path::Path::new("quiz-logs/example.json");
    if example_path.exists() {
        println!("quiz-logs/example.json already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_QUIZ_LOG)?;
        println!("Created quiz-logs/example.json");
    }

    println!("\nNext steps:");
    println!("  1. Edit quizreport.toml to pick the report mode and output");
    println!("  2. Run: quizreport validate --log quiz-logs/example.json");
    println!("  3. Run: quizreport render --log quiz-logs/example.json");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizreport configuration

title = "Example Quiz"

[report]
enabled = true
# verbose | concise
mode = "verbose"
# en | ru
locale = "en"

[report.output]
# console | file
mode = "console"
# path = "reports/example.txt"
"#;

const EXAMPLE_QUIZ_LOG: &str = r#"{
  "entries": [
    {
      "number": 1,
      "question": {
        "text": "Which keyword declares an immutable binding in Rust?",
        "options": ["var", "let", "const fn"],
        "correct_answers": [2]
      },
      "answers": [2],
      "successful": true
    },
    {
      "number": 2,
      "question": {
        "text": "Which of these are integer types?",
        "options": ["u8", "f32", "i64", "bool"],
        "correct_answers": [1, 3]
      },
      "answers": [1],
      "successful": false
    }
  ]
}
"#;
