//! Format output dispatch helpers

/// Dispatch output by format, one block per format.
///
/// ```rust,ignore
/// output_by_format!(ctx.format,
///     json => { print_json(&value)?; },
///     human => { println!("{}", line); },
///     records => { println!("B {}", bw); }
/// );
/// ```
#[macro_export]
macro_rules! output_by_format {
    ($format:expr, json => $json:block, human => $human:block, records => $records:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => $human,
            $crate::cli::OutputFormat::Records => $records,
        }
    };
}
