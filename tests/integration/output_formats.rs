use crate::common::Workspace;

fn stdout_of(ws: &Workspace, args: &[&str]) -> String {
    let output = ws.command().args(args).output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn stats_json_output() {
    let ws = Workspace::new();
    ws.write_file("data.txt", "1\n2\n3\n4\nx\n");

    let out = stdout_of(&ws, &["--format", "json", "--no-save", "stats", "data.txt"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["statistics"]["count"], 4);
    assert_eq!(value["statistics"]["mean"], 2.5);
    assert_eq!(value["statistics"]["mode"], "no unique mode");
    assert_eq!(value["rejected"][0]["line"], 5);
    assert_eq!(value["rejected"][0]["reason"], "not_a_number");
    assert!(value["elapsed_seconds"].is_number());
}

#[test]
fn convert_json_output_is_saved_in_same_format() {
    let ws = Workspace::new();
    ws.write_file("numbers.txt", "-1\n16\n");

    let out = stdout_of(&ws, &["convert", "numbers.txt", "--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let conversions = value["conversions"].as_array().unwrap();

    assert_eq!(conversions.len(), 2);
    assert_eq!(conversions[0]["binary"], "1111111111");
    assert_eq!(conversions[1]["index"], 2);
    assert_eq!(conversions[1]["hexadecimal"], "10");
    assert_eq!(ws.read_file("ConvertionResults.txt"), out);
}

#[test]
fn wordcount_yaml_output() {
    let ws = Workspace::new();
    ws.write_file("text.txt", "b a B\n");

    let out = stdout_of(&ws, &["--format", "yaml", "--no-save", "wordcount", "text.txt"]);

    assert!(out.contains("total_words: 3"));
    assert!(out.contains("distinct_words: 2"));
    assert!(out.find("word: a").unwrap() < out.find("word: b").unwrap());
}
