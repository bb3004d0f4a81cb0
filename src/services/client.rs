use crate::{AbstractFactory, FactoryError};
use std::io::Write;

/// Client code that only sees factories and products through their abstract
/// interfaces, so any factory can be passed in.
///
/// Writes the product B result and the result of B collaborating with A,
/// one line each.
pub fn client_code<F, W>(factory: &F, out: &mut W) -> Result<(), FactoryError>
where
    F: AbstractFactory + ?Sized,
    W: Write,
{
    let product_a = factory.create_product_a();
    let product_b = factory.create_product_b();

    writeln!(out, "{}", product_b.useful_function_b())?;
    writeln!(out, "{}", product_b.another_useful_function_b(product_a.as_ref()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factories::{ConcreteFactory1, ConcreteFactory2, for_variant};
    use crate::Variant;

    fn run_client<F: AbstractFactory + ?Sized>(factory: &F) -> Vec<String> {
        let mut out = Vec::new();
        client_code(factory, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_client_with_first_factory() {
        assert_eq!(
            run_client(&ConcreteFactory1),
            vec![
                "The result of the product B1.",
                "The result of the B1 collaborating with the (The result of the product A1.)",
            ]
        );
    }

    #[test]
    fn test_client_with_second_factory() {
        assert_eq!(
            run_client(&ConcreteFactory2),
            vec![
                "The result of the product B2.",
                "The result of the B2 collaborating with the (The result of the product A2.)",
            ]
        );
    }

    #[test]
    fn test_client_with_boxed_factory() {
        let factory = for_variant(Variant::Two);
        let lines = run_client(factory.as_ref());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "The result of the product B2.");
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_reported() {
        let result = client_code(&ConcreteFactory1, &mut FailingWriter);
        assert!(matches!(result, Err(FactoryError::Output(_))));
    }
}
