use crate::{DemoConfig, FactoryError, factories::Factories, services::client_code};
use std::io::Write;

/// Runs the client code once per configured factory variant.
///
/// The client code never changes between runs; only the factory handed to it
/// does. Sections are separated by a blank line.
pub struct Demo {
    config: DemoConfig,
    factories: Factories,
}

impl Demo {
    pub fn new(config: DemoConfig) -> Self {
        Self {
            config,
            factories: Factories::new(),
        }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<(), FactoryError> {
        self.config.validate()?;

        for (index, variant) in self.config.variants.iter().copied().enumerate() {
            if index > 0 {
                writeln!(out)?;
            }

            tracing::info!(%variant, "running client code");
            writeln!(out, "{}", Self::header(index))?;
            client_code(self.factories.get(variant), out)?;
        }

        Ok(())
    }

    pub fn run_to_string(&self) -> Result<String, FactoryError> {
        let mut out = Vec::new();
        self.run(&mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    fn header(index: usize) -> &'static str {
        if index == 0 {
            "Client: Testing client code with the first factory type:"
        } else {
            "Client: Testing the same client code with the second factory type:"
        }
    }
}

impl Default for Demo {
    fn default() -> Self {
        Self::new(DemoConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Variant;

    const DEFAULT_OUTPUT: &str = "\
Client: Testing client code with the first factory type:
The result of the product B1.
The result of the B1 collaborating with the (The result of the product A1.)

Client: Testing the same client code with the second factory type:
The result of the product B2.
The result of the B2 collaborating with the (The result of the product A2.)
";

    #[test]
    fn test_default_demo_output() {
        let output = Demo::default().run_to_string().unwrap();
        assert_eq!(output, DEFAULT_OUTPUT);
    }

    #[test]
    fn test_reordered_variants() {
        let demo = Demo::new(DemoConfig::new(vec![Variant::Two, Variant::One]));
        let output = demo.run_to_string().unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines[0],
            "Client: Testing client code with the first factory type:"
        );
        assert_eq!(lines[1], "The result of the product B2.");
        assert_eq!(lines[3], "");
        assert_eq!(lines[5], "The result of the product B1.");
    }

    #[test]
    fn test_single_variant_has_no_separator() {
        let demo = Demo::new(DemoConfig::new(vec![Variant::One]));
        let output = demo.run_to_string().unwrap();
        assert_eq!(output.lines().count(), 3);
        assert!(!output.contains("\n\n"));
    }

    #[test]
    fn test_empty_config_rejected() {
        let demo = Demo::new(DemoConfig::new(Vec::new()));
        assert!(matches!(
            demo.run_to_string(),
            Err(FactoryError::InvalidConfig(_))
        ));
    }
}
