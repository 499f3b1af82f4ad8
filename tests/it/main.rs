
use std::collections::BTreeMap;

use expect_test::{expect, Expect};
use flagparse::{Flag, Outcome, Parser};

fn check(flags: Vec<Flag>, args: &str, expect: Expect) {
    let args = args.split_ascii_whitespace().map(String::from).collect::<Vec<_>>();
    let parser = Parser::new(args, flags, "prog");
    match parser.parse() {
        Ok((matches, leftovers)) => {
            let matches = matches.iter().collect::<BTreeMap<&str, &Outcome>>();
            expect.assert_debug_eq(&(matches, leftovers));
        }
        Err(err) => {
            expect.assert_eq(&err.to_string());
        }
    }
}

fn help() -> Flag {
    Flag::new("h", "help").unwrap().store_true()
}

fn echo() -> Flag {
    Flag::new("e", "echo").unwrap()
}

#[test]
fn store_true_flag() {
    check(
        vec![help()],
        "-h",
        expect![[r#"
            (
                {
                    "hhelp": Outcome {
                        present: true,
                        value: "",
                    },
                },
                [],
            )
        "#]],
    );
}

#[test]
fn flag_with_value() {
    check(
        vec![echo()],
        "--echo hi",
        expect![[r#"
            (
                {
                    "eecho": Outcome {
                        present: true,
                        value: "hi",
                    },
                },
                [],
            )
        "#]],
    );
    check(vec![echo()], "--echo", expect![[r#"flag e/echo requires an argument"#]]);
    check(vec![help(), echo()], "-h -e", expect![[r#"flag e/echo requires an argument"#]]);
}

#[test]
fn required_flag() {
    let xyz = || Flag::new("x", "xyz").unwrap().required();
    check(vec![xyz()], "", expect![[r#"required flag x/xyz was not given"#]]);
    check(vec![help(), xyz()], "-h", expect![[r#"required flag x/xyz was not given"#]]);
    check(
        vec![xyz(), help()],
        "--xyz 1",
        expect![[r#"
            (
                {
                    "hhelp": Outcome {
                        present: false,
                        value: "",
                    },
                    "xxyz": Outcome {
                        present: true,
                        value: "1",
                    },
                },
                [],
            )
        "#]],
    );
}

#[test]
fn leftovers_keep_their_order() {
    check(
        vec![help()],
        "foo -h bar",
        expect![[r#"
            (
                {
                    "hhelp": Outcome {
                        present: true,
                        value: "",
                    },
                },
                [
                    "foo",
                    "bar",
                ],
            )
        "#]],
    );
    check(
        vec![echo()],
        "a b - c",
        expect![[r#"
            (
                {
                    "eecho": Outcome {
                        present: false,
                        value: "",
                    },
                },
                [
                    "a",
                    "b",
                    "-",
                    "c",
                ],
            )
        "#]],
    );
}

#[test]
fn plain_tokens_are_all_leftovers() {
    let pool = ["", "-", "a-", "foo", "x-y-", "42", " ", "é"];
    let mut inputs = vec![Vec::new()];
    for len in 1..=4 {
        for start in 0..pool.len() {
            let input = (0..len)
                .map(|i| pool[(start + i * 2) % pool.len()].to_string())
                .collect::<Vec<_>>();
            inputs.push(input);
        }
    }

    for input in inputs {
        let parser = Parser::new(input.clone(), vec![help(), echo()], "prog");
        let (matches, leftovers) = parser.parse().unwrap();
        assert_eq!(leftovers, input);
        assert!(!matches.is_present("hhelp").unwrap());
        assert!(!matches.is_present("eecho").unwrap());
    }
}

#[test]
fn unknown_flags() {
    check(vec![help()], "--werbose", expect![[r#"unknown flag '--werbose'"#]]);
    check(vec![help()], "--h", expect![[r#"unknown flag '--h'"#]]);
    check(vec![help()], "-help", expect![[r#"unknown flag '-help'"#]]);
    check(vec![], "a -x", expect![[r#"unknown flag '-x'"#]]);
}

#[test]
fn value_may_look_like_a_flag() {
    check(
        vec![help(), echo()],
        "-e -h",
        expect![[r#"
            (
                {
                    "eecho": Outcome {
                        present: true,
                        value: "-h",
                    },
                    "hhelp": Outcome {
                        present: false,
                        value: "",
                    },
                },
                [],
            )
        "#]],
    );
}

#[test]
fn colliding_match_keys_share_an_outcome() {
    let flags = vec![
        Flag::new("ab", "c").unwrap().required(),
        Flag::new("a", "bc").unwrap().store_true(),
    ];
    check(
        flags,
        "--bc",
        expect![[r#"
            (
                {
                    "abc": Outcome {
                        present: true,
                        value: "",
                    },
                },
                [],
            )
        "#]],
    );
}

#[test]
fn lookup_errors_propagate() {
    fn run() -> flagparse::Result<bool> {
        let parser = Parser::new(vec!["-h".to_string()], vec![help()], "prog");
        let (matches, _) = parser.parse()?;
        Ok(matches.is_present("help")?)
    }
    expect![[r#"flag 'help' was never declared"#]].assert_eq(&run().unwrap_err().to_string());
}

#[test]
fn declaration_errors() {
    let err = |short: &str, long: &str| Flag::new(short, long).unwrap_err().to_string();
    expect![[r#"a flag needs a short or a long name"#]].assert_eq(&err("", ""));
    expect![[r#"flag name 'a=b' contains invalid character '='"#]].assert_eq(&err("", "a=b"));
    expect![[r#"flag name '--' consists only of hyphens"#]].assert_eq(&err("--", "x"));
    expect![[r#"flag name '-h' starts or ends with a hyphen"#]].assert_eq(&err("-h", "help"));
}
