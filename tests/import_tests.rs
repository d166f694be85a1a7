use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{hud, setup_test_db, write_fixture};

fn init(db_path: &str) {
    hud()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

#[test]
fn test_import_csv_with_arabic_headers() {
    let db_path = setup_test_db("import_arabic_headers");
    init(&db_path);

    let file = write_fixture(
        "import_arabic_headers",
        "\u{feff}الاسم,رقم الجوال,التاريخ,النوع,المدة\n\
         خالد,0501234567,15/3/2023,متطوع,4\n\
         سارة,٠٥٥١٢٣٤٥٦٧,١٥/٣/٢٠٢٣,متدرب,\n",
    );

    hud()
        .args(["--db", &db_path, "import", "--file", &file, "--city", "الرياض"])
        .assert()
        .success()
        .stdout(contains("تم استيراد 2 سجل بنجاح"));

    // Imported history is hidden from the default view…
    hud()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("خالد").not());

    // …but shows up with --all, with the import note attached.
    hud()
        .args(["--db", &db_path, "list", "--all"])
        .assert()
        .success()
        .stdout(contains("خالد"))
        .stdout(contains("تم الاستيراد من ملف (4 ساعة)"))
        .stdout(contains("تم الاستيراد من ملف (8 ساعة)"));
}

#[test]
fn test_import_visible_when_filter_active() {
    let db_path = setup_test_db("import_filter_visible");
    init(&db_path);

    let file = write_fixture(
        "import_filter_visible",
        "name,phone,date\nخالد,0501234567,15/3/2023\n",
    );

    hud()
        .args(["--db", &db_path, "import", "--file", &file, "--city", "جيزان"])
        .assert()
        .success();

    hud()
        .args(["--db", &db_path, "list", "--city", "جيزان"])
        .assert()
        .success()
        .stdout(contains("خالد"));
}

#[test]
fn test_import_missing_columns_aborts() {
    let db_path = setup_test_db("import_missing_columns");
    init(&db_path);

    let file = write_fixture(
        "import_missing_columns",
        "الاسم,رقم الجوال\nخالد,0501234567\n",
    );

    hud()
        .args(["--db", &db_path, "import", "--file", &file, "--city", "الرياض"])
        .assert()
        .failure()
        .stderr(contains("الأعمدة المطلوبة"))
        .stderr(contains("التاريخ"));

    hud()
        .args(["--db", &db_path, "list", "--all"])
        .assert()
        .success()
        .stdout(contains("خالد").not());
}

#[test]
fn test_import_header_only_file_is_empty() {
    let db_path = setup_test_db("import_header_only");
    init(&db_path);

    let file = write_fixture("import_header_only", "الاسم,رقم الجوال,التاريخ\n");

    hud()
        .args(["--db", &db_path, "import", "--file", &file, "--city", "الرياض"])
        .assert()
        .failure()
        .stderr(contains("الملف فارغ"));
}

#[test]
fn test_import_skips_invalid_rows_with_warnings() {
    let db_path = setup_test_db("import_partial_rows");
    init(&db_path);

    let file = write_fixture(
        "import_partial_rows",
        "الاسم,رقم الجوال,التاريخ\n\
         خالد,0501234567,15/3/2023\n\
         ,0509999999,15/3/2023\n",
    );

    hud()
        .args(["--db", &db_path, "import", "--file", &file, "--city", "الرياض"])
        .assert()
        .success()
        .stdout(contains("تم استيراد 1 سجل بنجاح"))
        .stdout(contains("skipped"));
}

#[test]
fn test_import_unsupported_extension() {
    let db_path = setup_test_db("import_bad_ext");
    init(&db_path);

    let mut path = std::env::temp_dir();
    path.push("import_bad_ext_fixture.txt");
    std::fs::write(&path, "x").expect("write txt fixture");
    let bad = path.to_string_lossy().to_string();

    hud()
        .args(["--db", &db_path, "import", "--file", &bad, "--city", "الرياض"])
        .assert()
        .failure()
        .stderr(contains("Unsupported file type"));
}
