use menu_import::{import_dishes, ImportConfig};
use serde_json::Value;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

const DISHES_CSV: &str = "\u{FEFF}id;category_id;order;price;ka;en;ru;story_ka;story_en;vegetarian;topRated;soldOut
khachapuri;bakery;1;23.50;ხაჭაპური;Khachapuri;Хачапури;The history of this dish...;ამ კერძის ისტორია...;Yes;1;0
;bakery;2;5;;Orphan;;;;;;
khinkali;mains;2.0;23.00/25.00;ხინკალი;Khinkali;Хинкали;ისტორია;History;no;maybe;
lobio;mains;x;abc;ლობიო;Lobio;Лобио;;;y;;
";

fn read_items(path: &std::path::Path) -> Vec<Value> {
    let json: Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    json["items"].as_array().unwrap().clone()
}

#[test]
fn test_import_dishes_end_to_end() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("dishes.csv");
    let output = dir.path().join("dishes.json");
    fs::write(&input, DISHES_CSV).unwrap();

    let count = import_dishes(&input, &output, &ImportConfig::default()).unwrap();
    assert_eq!(count, 3);

    let items = read_items(&output);
    let ids: Vec<&str> = items.iter().map(|d| d["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["khachapuri", "khinkali", "lobio"]);

    let khachapuri = &items[0];
    assert_eq!(khachapuri["categoryId"], "bakery");
    assert_eq!(khachapuri["order"], 1);
    assert_eq!(khachapuri["status"], "active");
    assert_eq!(khachapuri["priceMinor"], 2350);
    assert_eq!(khachapuri["currency"], "GEL");
    assert_eq!(khachapuri["title"]["ka"], "ხაჭაპური");
    assert_eq!(khachapuri["story"]["ka"], "ამ კერძის ისტორია...");
    assert_eq!(khachapuri["story"]["en"], "The history of this dish...");
    assert_eq!(khachapuri["story"]["ru"], "");
    assert_eq!(khachapuri["vegetarian"], true);
    assert_eq!(khachapuri["topRated"], true);
    assert_eq!(khachapuri["soldOut"], false);

    let khinkali = &items[1];
    assert_eq!(khinkali["order"], 2);
    assert_eq!(khinkali["priceMinor"], 2300);
    assert_eq!(khinkali["story"]["ka"], "ისტორია");
    assert_eq!(khinkali["story"]["en"], "History");
    assert_eq!(khinkali["vegetarian"], false);
    // Unrecognized flag values count as set
    assert_eq!(khinkali["topRated"], true);
    assert_eq!(khinkali["soldOut"], false);

    let lobio = &items[2];
    assert_eq!(lobio["order"], 0);
    assert_eq!(lobio["priceMinor"], 0);
    assert_eq!(lobio["vegetarian"], true);
}

#[test]
fn test_menu_export_layout() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("dishes.csv");
    let output = dir.path().join("dishes.json");
    fs::write(
        &input,
        "id,order,category_id,ka,en,ru,price,vegetarian,topRated,soldOut,description_en,story_en\n\
         d1,1,soups,ხარჩო,Kharcho,Харчо,12.00,no,yes,no,Beef soup,Old recipe\n",
    )
    .unwrap();

    import_dishes(&input, &output, &ImportConfig::default()).unwrap();

    let items = read_items(&output);
    assert_eq!(items[0]["title"]["ka"], "ხარჩო");
    assert_eq!(items[0]["title"]["en"], "Kharcho");
    assert_eq!(items[0]["title"]["ru"], "Харчо");
    assert_eq!(items[0]["priceMinor"], 1200);
    assert_eq!(items[0]["topRated"], true);
    assert_eq!(items[0]["soldOut"], false);
    assert_eq!(items[0]["description"]["en"], "Beef soup");

    let text = fs::read_to_string(&output).unwrap();
    let keys: Vec<usize> = [
        "\"id\"", "\"categoryId\"", "\"order\"", "\"status\"", "\"priceMinor\"",
        "\"currency\"", "\"title\"", "\"description\"", "\"vegetarian\"",
        "\"topRated\"", "\"soldOut\"", "\"story\"",
    ]
    .iter()
    .map(|key| text.find(key).unwrap())
    .collect();
    assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_output_is_pretty_and_unescaped() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("dishes.csv");
    let output = dir.path().join("dishes.json");
    fs::write(&input, "id,ka\nd1,ხაჭაპური\n").unwrap();

    import_dishes(&input, &output, &ImportConfig::default()).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("{\n  \"items\": [\n    {\n      \"id\": \"d1\","));
    assert!(text.contains("\"ka\": \"ხაჭაპური\""));
    assert!(!text.contains("\\u"));
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("dishes.csv");
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");
    fs::write(&input, DISHES_CSV).unwrap();

    import_dishes(&input, &first, &ImportConfig::default()).unwrap();
    import_dishes(&input, &second, &ImportConfig::default()).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_tab_and_pipe_exports() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("dishes.json");

    for table in [
        "id\tprice\ten\nd1\t4,50\tBread, butter\n",
        "id|price|en\nd1|4,50|Bread, butter\n",
    ] {
        let input = dir.path().join("dishes.csv");
        fs::write(&input, table).unwrap();
        import_dishes(&input, &output, &ImportConfig::default()).unwrap();

        let items = read_items(&output);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["priceMinor"], 450);
        assert_eq!(items[0]["title"]["en"], "Bread, butter");
    }
}

#[test]
fn test_empty_table_writes_empty_items() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("dishes.csv");
    let output = dir.path().join("dishes.json");
    fs::write(&input, "id,price\n").unwrap();

    assert_eq!(import_dishes(&input, &output, &ImportConfig::default()).unwrap(), 0);
    assert_eq!(fs::read_to_string(&output).unwrap(), "{\n  \"items\": []\n}");
}

#[test]
fn test_missing_input_is_an_error() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("dishes.json");
    let result = import_dishes(dir.path().join("nope.csv"), &output, &ImportConfig::default());

    assert!(result.is_err());
    assert!(!output.exists());
}

#[test]
fn test_binary_uses_default_paths() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("dishes.csv"), DISHES_CSV).unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_menu-dishes"))
        .current_dir(dir.path())
        .env_remove("MENU_IMPORT__DISHES_INPUT")
        .env_remove("MENU_IMPORT__DISHES_OUTPUT")
        .output()
        .unwrap();

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Wrote 3 dishes"));
    assert_eq!(read_items(&dir.path().join("dishes.json")).len(), 3);
}

#[test]
fn test_binary_explicit_paths() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("menu.csv");
    let output = dir.path().join("menu.json");
    fs::write(&input, "id,price\nd1,1.5\n").unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_menu-dishes"))
        .current_dir(dir.path())
        .arg(&input)
        .arg(&output)
        .status()
        .unwrap();

    assert!(status.success());
    assert_eq!(read_items(&output)[0]["priceMinor"], 150);
}
