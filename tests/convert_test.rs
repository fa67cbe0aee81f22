//! End-to-end conversion scenarios.

use csv_mt940::{convert, Error};
use pretty_assertions::assert_eq;

const HEADER: &str = "Type,Date started (UTC),Date completed (UTC),ID,Description,Reference,Payment currency,Amount,Balance,Beneficiary IBAN";

fn ledger(rows: &[&str]) -> String {
    let mut text = String::from(HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    text.push('\n');
    text
}

#[test]
fn test_single_transaction_statement() {
    let csv = "Date completed (UTC),Amount,Balance,Payment currency,Type,ID\n\
               2024-01-15,-12.50,987.50,EUR,CARD_PAYMENT,abc-123\n";
    let out = convert(csv, "DE89 3704 0044 0532 0130 00").unwrap();

    let expected = [
        ":20:MT940",
        ":25:/DE89370400440532013000",
        ":28C:1",
        ":60F:C240115EUR987,50",
        ":61:2401150115D12,50N119NONREF//abc123",
        "119 0",
        ":86:020~00119",
        "~60€",
        "~63€",
        ":62F:C240115EUR987,50",
        ":64:C240131EUR987,50",
        "-",
    ];
    assert_eq!(out.lines().collect::<Vec<_>>(), expected);
    assert!(out.ends_with("-\n"));
}

#[test]
fn test_fee_detection() {
    let csv = ledger(&["CARD_FEE,,2024-01-15,f-1,,,EUR,-1.00,9.00,"]);
    let out = convert(&csv, "DE00").unwrap();
    assert!(out.contains(":61:2401150115D1,00N49NONREF//f1\n49 0\n:86:020~0049\n"));
    assert!(!out.contains("119"));
}

#[test]
fn test_multi_line_description() {
    let description: String = ('a'..='z').cycle().take(80).collect();
    let csv = ledger(&[&format!(
        "TRANSFER,,2024-01-15,t-1,{},INV 42,EUR,100,200,DE11 2222 3333",
        description
    )]);
    let out = convert(&csv, "DE00").unwrap();
    let lines: Vec<&str> = out.lines().collect();

    let start = lines.iter().position(|l| l.starts_with(":86:")).unwrap();
    assert_eq!(
        lines[start..start + 7].to_vec(),
        vec![
            ":86:020~00119".to_string(),
            "~20INV 42".to_string(),
            format!("~32{}", &description[..35]),
            format!("~33{}", &description[35..70]),
            format!("~38{}", &description[70..]),
            "~38DE1122223333".to_string(),
            "~60€".to_string(),
        ]
    );
}

#[test]
fn test_chronological_ordering() {
    let csv = ledger(&[
        "TOPUP,,2024-01-20,c,,,USD,30,60,",
        "TOPUP,,2024-01-10,b,,,USD,20,30,",
        "TOPUP,,2024-01-01,a,,,USD,10,10,",
    ]);
    let out = convert(&csv, "US00").unwrap();
    let lines: Vec<&str> = out.lines().collect();

    let tx_lines: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|l| l.starts_with(":61:"))
        .collect();
    assert_eq!(
        tx_lines,
        vec![
            ":61:2401010101C10,00N119NONREF//a",
            ":61:2401100110C20,00N119NONREF//b",
            ":61:2401200120C30,00N119NONREF//c",
        ]
    );
    assert_eq!(lines[3], ":60F:C240101USD10,00");
    assert!(lines.contains(&":62F:C240120USD60,00"));
    assert!(lines.contains(&":64:C240131USD60,00"));
    // Non-default currency is written as its code.
    assert!(lines.contains(&"~60USD"));
}

#[test]
fn test_start_date_fallback_and_comma_amounts() {
    let csv = ledger(&[
        "TOPUP,,2024-02-02,b,,,EUR,\"5,25\",\"15,25\",",
        "TOPUP,2024-02-01,,a,,,EUR,\"10,00\",\"10,00\",",
    ]);
    let out = convert(&csv, "DE00").unwrap();
    assert!(out.contains(":60F:C240201EUR10,00\n"));
    assert!(out.contains(":61:2402010201C10,00N119NONREF//a\n"));
    assert!(out.contains(":61:2402020202C5,25N119NONREF//b\n"));
    assert!(out.contains(":64:C240229EUR15,25\n"));
}

#[test]
fn test_empty_inputs_rejected() {
    assert!(matches!(convert("", "DE00"), Err(Error::EmptyInput)));
    assert!(matches!(convert(&ledger(&[]), "DE00"), Err(Error::EmptyInput)));
}

#[test]
fn test_malformed_row_rejected() {
    let csv = ledger(&["TOPUP,,2024-01-15,a,,,EUR,1,1,,extra"]);
    assert!(matches!(
        convert(&csv, "DE00"),
        Err(Error::MalformedRow { line: 2, .. })
    ));
}

#[test]
fn test_bad_closing_date_rejected() {
    let csv = ledger(&["TOPUP,,15/01/2024,a,,,EUR,1,1,"]);
    assert!(matches!(convert(&csv, "DE00"), Err(Error::DateParse(_))));
}

#[test]
fn test_amounts_never_signed() {
    let csv = ledger(&[
        "TOPUP,,2024-01-03,c,,,EUR,0,0,",
        "CARD_PAYMENT,,2024-01-02,b,,,EUR,-0.01,0,",
        "TOPUP,,2024-01-01,a,,,EUR,0.01,0.01,",
    ]);
    let out = convert(&csv, "DE00").unwrap();
    for line in out.lines().filter(|l| l.starts_with(":61:")) {
        assert!(!line.contains('-'), "{line}");
    }
    assert!(out.contains(":61:2401020102D0,01N"));
    assert!(out.contains(":61:2401030103C0,00N"));
}
