use assert_cmd::Command;
use predicates::str::contains;

fn script_command() -> Command {
    let mut cmd = Command::cargo_bin("budget_tracker_cli").unwrap();
    cmd.env("BUDGET_TRACKER_CLI_SCRIPT", "1");
    cmd
}

#[test]
fn script_mode_runs_a_basic_flow() {
    let input = "add 100 Paycheck\nadd -5.5 Breakfast 02/17\nbalance\nprint 1\nfilter Pay\nexit\n";

    script_command()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Recorded 100.00$ Paycheck"))
        .stdout(contains("Balance: 94.50$"))
        .stdout(contains("0: -5.50$ Breakfast 02/17"))
        .stdout(contains("Total for `Pay`: 100.00$"));
}

#[test]
fn out_of_range_indices_report_an_error_and_keep_going() {
    let input = "add 10 One\nremove 5\nbalance\nexit\n";

    script_command()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("ERROR: index 5 is out of range for 1 records"))
        .stdout(contains("Balance: 10.00$"));
}

#[test]
fn unknown_commands_get_a_suggestion() {
    script_command()
        .write_stdin("blance\nexit\n")
        .assert()
        .success()
        .stdout(contains("Did you mean `balance`?"));
}

#[test]
fn demo_walkthrough_prints_each_stage() {
    script_command()
        .write_stdin("demo\nexit\n")
        .assert()
        .success()
        .stdout(contains("=== Initial records ==="))
        .stdout(contains("Balance: 69.20$"))
        .stdout(contains("Balance: 73.80$"))
        .stdout(contains("=== After moving back up ==="))
        .stdout(contains("0: -15.20$ Dinner 02/17"));
}
