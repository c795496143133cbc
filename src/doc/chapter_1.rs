/*!
# Expressions

An expression is an amount followed by an optional destination currency.
Letters are not case sensitive.

```text
expression  = amount [ [IN | TO] currency ]
amount      = term { (+ | -) term }
term        = factor { (* | /) factor }
factor      = operand [ ^ factor ]
operand     = (+ | -) factor | number [currency] | currency number | ( amount )
```

Operators follow the usual precedence. `^` is the highest and groups to
the right, so `2^3^2` is 512. A leading sign applies to the whole power,
so `-2^2` is -4. Nesting deeper than 256 levels is rejected.

## Numbers

Digits may be grouped with spaces, apostrophes, backticks, commas, or
periods. Which characters mark the decimal point is set with `--dec-sep`
and defaults to `.`.

```text
1 000 000    one million
1'000.50     one thousand and a half
```

With `--dec-sep ,` a comma is the decimal point and periods are only
grouping, so `1.000,5` is one thousand and a half. A number with two
decimal points is rejected.

## Percentages

A percentage adjusts the amount to the left of the operator it follows.

```text
100 + 15%    115
100 - 15%    85
```

Only addition and subtraction accept a percentage. `100 * 5%` is an error.

*/
