/*!
# Introductory Tutorial for curconv

curconv needs an API key for the currconv service. Pass it with
`--api-key` or export it once in your shell profile.

```text
$ export API_KEY=0123456789abcdef
$ export DEFAULT_SRC_CURRENCY=USD
$ export DEFAULT_TGT_CURRENCY=EUR
```

With both default currencies set, a bare number is converted from the
default source currency to the default target currency.

```text
$ curconv 100
100.00$ is 92.14€
```

Name a currency next to the amount to override the source, and add a
destination with `in`, `to`, or nothing at all.

```text
$ curconv '1 500 GBP'
1 500.00£ is 1 754.21€
$ curconv '£10 in usd'
10.00£ is 12.69$
$ curconv '10 usd jpy'
10.00$ is 1 478.50 JPY
```

Amounts may be calculated before they are converted.

```text
$ curconv '(12 + 8) * 3 usd to cad'
60.00$ is 82.38 CAD
$ curconv '200 eur + 20%'
240.00€ is 260.51$
```

Rates are remembered for an hour in `cur_conf_cache.json` inside the
system temporary directory. Use `--no-cache` to always ask the service
or `--clear-cache` to delete the file. `--list` shows every currency
curconv knows about.

*/
