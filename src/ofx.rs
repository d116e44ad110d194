//! OFX statement rendering.
//!
//! The tag names and nesting follow the OFX 1.x banking response message
//! set; GnuCash and similar tools are picky about both, so the shape below
//! must not change. Text fields arrive already escaped from normalization.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::types::Transaction;

const CURRENCY: &str = "EUR";
const BANK_ID: &str = "121099999";
const ACCOUNT_TYPE: &str = "CHECKING";
const ORG: &str = "NCH";
const FID: &str = "1001";
const TRNUID: &str = "1001";

/// Render one group of transactions into a full OFX document.
///
/// Emits one `<STMTRS>` block per distinct account, in order of first
/// appearance, each holding only that account's transactions. The statement
/// period is the group-wide posted-date range. `as_of` becomes the signon
/// timestamps.
pub fn render(transactions: &[Transaction], as_of: NaiveDate) -> String {
    let mut out = String::new();
    out.push_str(&signon(as_of));

    if let Some((start, end)) = date_range(transactions) {
        for account in accounts(transactions) {
            out.push_str(&statement_open(account, start, end));
            for txn in transactions.iter().filter(|t| t.account == account) {
                out.push_str(&transaction_block(txn));
            }
            out.push_str(statement_close());
        }
    }

    out.push_str(footer());
    out
}

/// Distinct accounts in order of first appearance.
fn accounts(transactions: &[Transaction]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for txn in transactions {
        if !seen.contains(&txn.account.as_str()) {
            seen.push(&txn.account);
        }
    }
    seen
}

fn date_range(transactions: &[Transaction]) -> Option<(NaiveDate, NaiveDate)> {
    let min = transactions.iter().map(|t| t.posted).min()?;
    let max = transactions.iter().map(|t| t.posted).max()?;
    Some((min, max))
}

fn signon(as_of: NaiveDate) -> String {
    let date = as_of.format("%Y%m%d");
    format!(
        "<OFX>
   <SIGNONMSGSRSV1>
      <SONRS>
         <STATUS>
            <CODE>0</CODE>
            <SEVERITY>INFO</SEVERITY>
         </STATUS>
         <DTSERVER>{date}</DTSERVER>
         <LANGUAGE>ENG</LANGUAGE>
         <DTPROFUP>{date}</DTPROFUP>
         <DTACCTUP>{date}</DTACCTUP>
         <FI>
            <ORG>{ORG}</ORG>
            <FID>{FID}</FID>
         </FI>
      </SONRS>
   </SIGNONMSGSRSV1>
   <BANKMSGSRSV1>
      <STMTTRNRS>
         <TRNUID>{TRNUID}</TRNUID>
         <STATUS>
            <CODE>0</CODE>
            <SEVERITY>INFO</SEVERITY>
         </STATUS>"
    )
}

fn statement_open(account: &str, start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "
         <STMTRS>
            <CURDEF>{CURRENCY}</CURDEF>
            <BANKACCTFROM>
               <BANKID>{BANK_ID}</BANKID>
               <ACCTID>{account}</ACCTID>
               <ACCTTYPE>{ACCOUNT_TYPE}</ACCTTYPE>
            </BANKACCTFROM>
            <BANKTRANLIST>
               <DTSTART>{start}</DTSTART>
               <DTEND>{end}</DTEND>",
        start = start.format("%Y%m%d"),
        end = end.format("%Y%m%d"),
    )
}

fn transaction_block(txn: &Transaction) -> String {
    let mut block = String::new();
    // Writing into a String cannot fail
    let _ = write!(
        block,
        "
               <STMTTRN>
                  <TRNTYPE>{trn_type}</TRNTYPE>
                  <DTPOSTED>{posted}</DTPOSTED>
                  <TRNAMT>{amount}</TRNAMT>
                  <FITID>{fitid}</FITID>
                  <NAME>{name}</NAME>
                  <BANKACCTTO>
                     <BANKID></BANKID>
                     <ACCTID>{counter_account}</ACCTID>
                     <ACCTTYPE>{ACCOUNT_TYPE}</ACCTTYPE>
                  </BANKACCTTO>
                  <MEMO>{memo}</MEMO>
               </STMTTRN>",
        trn_type = txn.trn_type,
        posted = txn.posted.format("%Y%m%d"),
        amount = txn.amount,
        fitid = txn.fitid,
        name = txn.name,
        counter_account = txn.counter_account,
        memo = txn.memo,
    );
    block
}

fn statement_close() -> &'static str {
    // Balance is not computed; DTASOF is the placeholder date from the OFX
    // sample the output shape was modeled on.
    "
            </BANKTRANLIST>
            <LEDGERBAL>
               <BALAMT>0</BALAMT>
               <DTASOF>199910291120</DTASOF>
            </LEDGERBAL>
         </STMTRS>"
}

fn footer() -> &'static str {
    "
      </STMTTRNRS>
   </BANKMSGSRSV1>
</OFX>
"
}
