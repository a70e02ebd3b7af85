use assert_cmd::Command;

pub fn moodlens_cmd() -> Command {
    Command::cargo_bin("moodlens").unwrap()
}
