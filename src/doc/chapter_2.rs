/*!
# Currencies and Rates

A currency is written as its three letter code or its symbol. Symbols may
be written before or after the amount.

```text
$10   10$   10 usd   usd 10
```

Only one source currency may appear in an expression, though it can be
repeated. `$10 + 5 usd` is fine, `$10 + 5 eur` is not.

When no source currency is written the default source currency is used.
When no destination is written the default target currency is used. If
either one is still unknown the expression is rejected.

## Caching

Every conversion needs the rate for one directed pair such as `USD_EUR`.
Fetched rates are stored with the time they were fetched. A rate older
than one hour is dropped when the cache is loaded and fetched again on
its next use.

## Output

`--format text` prints a sentence with both amounts, `--format num` only
the converted amount with two decimals, and `--format alfred` prints a
JSON document for the Alfred launcher. In Alfred mode errors are also
printed as JSON and the exit code is always 0.

*/
