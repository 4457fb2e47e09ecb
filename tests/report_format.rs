use pi_series_bench::config::OutputFormat;
use pi_series_bench::engine_types::Approximation;
use pi_series_bench::output::{
    format_deviation, new_report_writer, CsvReportWriter, JsonReportWriter, ReportWriter,
    TextReportWriter, CSV_HEADER,
};

fn sample(label: &'static str, value: f64, elapsed_ns: u64) -> Approximation {
    Approximation {
        label,
        value,
        elapsed_ns,
    }
}

#[test]
fn deviation_uses_one_leading_digit_and_two_digit_signed_exponent() {
    let cases: &[(f64, &str)] = &[
        (-1.0e-5, "-1.00000e-05"),
        (1.23456e-4, "1.23456e-04"),
        (-4.9995e-5, "-4.99950e-05"),
        (0.0, "0.00000e+00"),
        (12345.678, "1.23457e+04"),
        (8.881784197001252e-16, "8.88178e-16"),
        (1.0e-123, "1.00000e-123"),
    ];

    for &(dev, expected) in cases {
        assert_eq!(format_deviation(dev), expected, "deviation {dev:e}");
    }
}

#[test]
fn deviation_shape_holds_for_arbitrary_values() {
    for &dev in &[3.0e-7, -7.85349e-5, 2.5, -9.99e-10, 1.0e300] {
        let s = format_deviation(dev);
        let body = s.strip_prefix('-').unwrap_or(&s);
        let (mantissa, exp) = body.split_once('e').expect("exponent marker");
        let (int_part, frac) = mantissa.split_once('.').expect("decimal point");
        assert_eq!(int_part.len(), 1, "{s}");
        assert_eq!(frac.len(), 5, "{s}");
        assert!(exp.starts_with('+') || exp.starts_with('-'), "{s}");
        assert!(exp.len() >= 3, "{s}");
    }
}

#[test]
fn deviation_of_non_finite_value_does_not_fail() {
    assert_eq!(format_deviation(f64::NAN), "NaN");
    assert_eq!(format_deviation(f64::INFINITY), "inf");
}

#[test]
fn text_block_layout() {
    let mut writer = TextReportWriter::new(Vec::new());
    writer
        .write_result(&sample("Wallis Product", 3.5, 42), 3.0)
        .unwrap();
    writer.finish().unwrap();

    let out = String::from_utf8(writer.into_inner()).unwrap();
    assert_eq!(
        out,
        "Wallis Product\nPi:        3.5\nDeviation: 5.00000e-01\nTime:      42 ns\n\n"
    );
}

#[test]
fn text_value_uses_shortest_round_trip_repr() {
    let mut writer = TextReportWriter::new(Vec::new());
    writer
        .write_result(&sample("Madhava-Leibniz Sum", 3.1415426585893202, 1), 3.0)
        .unwrap();
    let out = String::from_utf8(writer.into_inner()).unwrap();
    assert!(out.contains("Pi:        3.1415426585893202\n"), "{out}");
}

#[test]
fn csv_writes_header_once() {
    let mut writer = CsvReportWriter::new(Vec::new());
    writer.write_result(&sample("A", 3.0, 1), 3.0).unwrap();
    writer.write_result(&sample("B", 4.0, 2), 3.0).unwrap();
    writer.finish().unwrap();

    let out = String::from_utf8(writer.into_inner()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![CSV_HEADER, "A,3,0.00000e+00,1", "B,4,1.00000e+00,2"]
    );
}

#[test]
fn csv_without_results_still_has_header() {
    let mut writer = CsvReportWriter::new(Vec::new());
    writer.finish().unwrap();
    let out = String::from_utf8(writer.into_inner()).unwrap();
    assert_eq!(out, format!("{CSV_HEADER}\n"));
}

#[test]
fn json_report_is_written_on_finish() {
    let mut writer = JsonReportWriter::new(Vec::new());
    writer.write_result(&sample("A", 3.25, 7), 3.0).unwrap();
    writer.write_result(&sample("B", 2.5, 9), 3.0).unwrap();
    writer.finish().unwrap();

    let out = writer.into_inner();
    let doc: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(doc["reference"], 3.0);
    assert_eq!(doc["tool_version"], env!("CARGO_PKG_VERSION"));
    assert!(doc["generated_at"].is_string());

    let results = doc["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["label"], "A");
    assert_eq!(results[0]["value"], 3.25);
    assert_eq!(results[0]["deviation"], "2.50000e-01");
    assert_eq!(results[0]["elapsed_ns"], 7);
    assert_eq!(results[1]["deviation"], "-5.00000e-01");
}

#[test]
fn factory_selects_writer_by_format() {
    let mut buf = Vec::new();
    {
        let mut writer = new_report_writer(OutputFormat::CSV, &mut buf);
        writer.write_result(&sample("A", 3.0, 1), 3.0).unwrap();
        writer.finish().unwrap();
    }
    let out = String::from_utf8(buf).unwrap();
    assert!(out.starts_with(CSV_HEADER), "{out}");
}
