use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{hud, init_db_with_data, setup_test_db};

#[test]
fn test_checkin_and_list() {
    let db_path = setup_test_db("checkin_and_list");
    init_db_with_data(&db_path);

    hud()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("سارة"))
        .stdout(contains("خالد"))
        .stdout(contains("الرياض"))
        .stdout(contains("جيزان"));
}

#[test]
fn test_checkin_rejects_bad_phone() {
    let db_path = setup_test_db("checkin_bad_phone");
    hud()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    hud()
        .args([
            "--db", &db_path, "checkin", "سارة", "123456", "--type", "متدرب", "--city", "الرياض",
        ])
        .assert()
        .failure()
        .stderr(contains("رقم الجوال"));
}

#[test]
fn test_volunteer_requires_opportunity_and_national_id() {
    let db_path = setup_test_db("volunteer_required_fields");
    hud()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    hud()
        .args([
            "--db", &db_path, "checkin", "خالد", "0598765432", "--type", "متطوع", "--city",
            "جيزان",
        ])
        .assert()
        .failure()
        .stderr(contains("الفرصة التطوعية"));

    hud()
        .args([
            "--db",
            &db_path,
            "checkin",
            "خالد",
            "0598765432",
            "--type",
            "متطوع",
            "--city",
            "جيزان",
            "--opportunity",
            "دعم تقني",
        ])
        .assert()
        .failure()
        .stderr(contains("رقم الهوية"));
}

#[test]
fn test_checkout_flow() {
    let db_path = setup_test_db("checkout_flow");
    init_db_with_data(&db_path);

    hud()
        .args(["--db", &db_path, "checkout", "0512345678", "--city", "الرياض"])
        .assert()
        .success()
        .stdout(contains("تم تسجيل الخروج بنجاح"));

    // Nothing left open for that phone today.
    hud()
        .args(["--db", &db_path, "checkout", "0512345678", "--city", "الرياض"])
        .assert()
        .failure()
        .stderr(contains("لا يوجد حضور مسجل"));
}

#[test]
fn test_checkout_wrong_city_fails() {
    let db_path = setup_test_db("checkout_wrong_city");
    init_db_with_data(&db_path);

    hud()
        .args(["--db", &db_path, "checkout", "0512345678", "--city", "الدمام"])
        .assert()
        .failure()
        .stderr(contains("لا يوجد حضور مسجل"));
}

#[test]
fn test_note_and_delete() {
    let db_path = setup_test_db("note_and_delete");
    init_db_with_data(&db_path);

    hud()
        .args(["--db", &db_path, "note", "1", "وصلت متأخرة"])
        .assert()
        .success();

    hud()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("وصلت متأخرة"));

    hud()
        .args(["--db", &db_path, "del", "1"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    // Second delete of the same id is a warning, not an error.
    hud()
        .args(["--db", &db_path, "del", "1"])
        .assert()
        .success()
        .stdout(contains("not found"));
}

#[test]
fn test_list_filters_by_city_and_phone() {
    let db_path = setup_test_db("list_filters");
    init_db_with_data(&db_path);

    hud()
        .args(["--db", &db_path, "list", "--city", "جيزان"])
        .assert()
        .success()
        .stdout(contains("خالد"))
        .stdout(contains("سارة").not());

    hud()
        .args(["--db", &db_path, "list", "--phone", "0512"])
        .assert()
        .success()
        .stdout(contains("سارة"))
        .stdout(contains("خالد").not());
}

#[test]
fn test_unknown_city_is_rejected() {
    let db_path = setup_test_db("unknown_city");
    hud()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    hud()
        .args([
            "--db", &db_path, "checkin", "سارة", "0512345678", "--type", "متدرب", "--city", "جدة",
        ])
        .assert()
        .failure()
        .stderr(contains("جدة"));
}
