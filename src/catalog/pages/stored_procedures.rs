use crate::catalog::{Catalog, EndpointDemo, NavItem};

pub fn catalog() -> Catalog {
    Catalog {
        nav: NavItem {
            path: "/stored-procedures",
            label: "Stored Procedures",
            desc: "FromSqlRaw with SPs",
        },
        title: "Stored Procedures",
        subtitle: "Demonstrates calling Northwind stored procedures via SqlQueryRaw<T>.",
        demos: vec![
            EndpointDemo::get(
                "CustOrderHist (Customer Order History)",
                "/api/storedprocedures/custorderhistory?customerId=ALFKI",
                "Calls the Northwind CustOrderHist stored procedure via SqlQueryRaw<T> with a parameterized @CustomerID.",
                r#"public class CustOrderHistResult
{
    public string ProductName { get; set; } = "";
    public int Total { get; set; }
}

[HttpGet("custorderhistory")]
public async Task<IActionResult> GetCustOrderHistory(string customerId)
{
    var param = new SqlParameter("@CustomerID", customerId);

    var results = await _context.Database
        .SqlQueryRaw<CustOrderHistResult>("EXEC CustOrderHist @CustomerID", param)
        .ToListAsync();

    return Ok(new {
        method = "SqlQueryRaw<T> - EXEC CustOrderHist",
        data = results
    });
}"#,
            ),
            EndpointDemo::get(
                "Ten Most Expensive Products",
                "/api/storedprocedures/tenmostexpensive",
                "Calls the Northwind \"Ten Most Expensive Products\" stored procedure - no parameters needed.",
                r#"public class TenMostExpensiveResult
{
    public string TenMostExpensiveProducts { get; set; } = "";
    public decimal UnitPrice { get; set; }
}

[HttpGet("tenmostexpensive")]
public async Task<IActionResult> GetTenMostExpensive()
{
    var results = await _context.Database
        .SqlQueryRaw<TenMostExpensiveResult>("EXEC [Ten Most Expensive Products]")
        .ToListAsync();

    return Ok(new {
        method = "SqlQueryRaw<T> - EXEC [Ten Most Expensive Products]",
        data = results
    });
}"#,
            ),
        ],
    }
}
